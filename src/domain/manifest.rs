//! Extension manifest model
//!
//! The original `package.json` is decoded once into [`ExtensionManifest`];
//! the publishable descriptor is built as a [`RepackedManifest`], whose field
//! order is the key order of the written file.

use crate::error::{RepackError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys that must be present in the original manifest.
pub const REQUIRED_KEYS: [&str; 5] = ["publisher", "name", "version", "displayName", "repository"];

/// The subset of an extension's `package.json` consumed by repackaging.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub publisher: String,
    pub name: String,
    pub version: String,
    pub display_name: String,
    pub repository: Value,
    #[serde(default, deserialize_with = "present_value")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub engines: Option<Value>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub keywords: Option<Value>,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl ExtensionManifest {
    /// File name of the archive as published: `<publisher>.<name>-<version>.<ext>`.
    pub fn archive_file_name(&self, extension: &str) -> String {
        format!("{}.{}-{}.{}", self.publisher, self.name, self.version, extension)
    }

    /// `repository.url`, when `repository` is an object carrying a string URL.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_object()?.get("url")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishConfig {
    pub registry: String,
}

/// The reduced descriptor written back as `package.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepackedManifest {
    pub files: Vec<String>,
    pub display_name: String,
    pub publish_config: PublishConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub name: String,
    pub version: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    pub repository: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Decode raw `package.json` bytes, reporting the first missing required key.
pub fn parse_manifest(bytes: &[u8]) -> Result<ExtensionManifest> {
    // vsce-produced manifests occasionally carry a UTF-8 BOM.
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|e| RepackError::malformed(format!("invalid JSON: {e}")))?;
    let Some(object) = raw.as_object() else {
        return Err(RepackError::malformed("top-level value is not a JSON object"));
    };

    if let Some(key) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
        return Err(RepackError::MissingKey { key: (*key).to_string() });
    }

    serde_json::from_value(raw).map_err(|e| RepackError::malformed(e.to_string()))
}

//! `package.json` rendering.

use crate::domain::RepackedManifest;
use crate::error::{RepackError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Serialize with 4-space indentation. Non-ASCII text is written as-is and
/// nested objects keep the key order of the original manifest.
pub fn render_manifest(manifest: &RepackedManifest) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn write_manifest(path: &Path, manifest: &RepackedManifest) -> Result<()> {
    let rendered = render_manifest(manifest)?;
    std::fs::write(path, rendered).map_err(|e| RepackError::filesystem(path, e))
}

#[cfg(test)]
mod tests {
    use super::render_manifest;
    use crate::domain::{PublishConfig, RepackedManifest};
    use serde_json::json;

    fn sample() -> RepackedManifest {
        RepackedManifest {
            files: vec!["acme.tool-1.2.3.vsix".to_string()],
            display_name: "Outil Été - VSC repacked extension".to_string(),
            publish_config: PublishConfig { registry: "https://nexus.local/npm/".to_string() },
            icon: None,
            name: "tool".to_string(),
            version: "1.2.3".to_string(),
            publisher: "acme".to_string(),
            description: None,
            repository: json!({"url": "https://example.com/tool.git", "type": "git"}),
            engines: Some(json!({"vscode": "^1.80.0"})),
            author: None,
            keywords: None,
        }
    }

    #[test]
    fn uses_four_space_indentation_and_keeps_unicode() {
        let text = String::from_utf8(render_manifest(&sample()).expect("render")).expect("utf8");

        assert!(text.starts_with("{\n    \"files\": [\n        \"acme.tool-1.2.3.vsix\"\n    ],"));
        assert!(text.contains("\"displayName\": \"Outil Été - VSC repacked extension\""));
        assert!(!text.contains("\\u00"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn keeps_key_order_and_skips_absent_optionals() {
        let text = String::from_utf8(render_manifest(&sample()).expect("render")).expect("utf8");

        let keys: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("    \"") && !line.starts_with("        "))
            .filter_map(|line| line.trim().split('"').nth(1))
            .collect();
        assert_eq!(
            keys,
            vec![
                "files",
                "displayName",
                "publishConfig",
                "name",
                "version",
                "publisher",
                "repository",
                "engines"
            ]
        );

        // Nested key order from the source object survives.
        let url_at = text.find("\"url\"").expect("url");
        let type_at = text.find("\"type\"").expect("type");
        assert!(url_at < type_at);
    }
}

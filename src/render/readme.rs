//! Provenance README rendering.

use crate::domain::ExtensionManifest;
use crate::error::{RepackError, Result};
use chrono::NaiveDateTime;
use std::path::Path;

/// Who repackaged the extension and when.
#[derive(Debug, Clone)]
pub struct Provenance {
    pub packager: String,
    pub packaged_on: NaiveDateTime,
}

impl Provenance {
    /// Provenance stamped with the current local time.
    pub fn now(packager: impl Into<String>) -> Self {
        Self { packager: packager.into(), packaged_on: chrono::Local::now().naive_local() }
    }
}

pub fn render_readme(manifest: &ExtensionManifest, provenance: &Provenance) -> String {
    let mut out = String::new();
    out.push_str("# Repackaging Information\n\n");
    out.push_str("This is a repackaged extension from an internet source.  \n");
    out.push_str(&format!("packaged by: {}  \n", provenance.packager));
    out.push_str(&format!(
        "packaged on: {}\n\n",
        provenance.packaged_on.format("%Y-%m-%dT%H:%M:%S%.6f")
    ));

    out.push_str("For extension documentation and README, check with the original extension");
    if let Some(homepage) = &manifest.homepage {
        out.push_str(&format!("  \nhomepage: {homepage}"));
    }
    if let Some(url) = manifest.repository_url() {
        out.push_str(&format!("  \nrepository: {url}"));
    }
    out.push('\n');
    out
}

pub fn write_readme(
    path: &Path,
    manifest: &ExtensionManifest,
    provenance: &Provenance,
) -> Result<()> {
    std::fs::write(path, render_readme(manifest, provenance))
        .map_err(|e| RepackError::filesystem(path, e))
}

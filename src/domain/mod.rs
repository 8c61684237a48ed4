//! Core data types shared across the crate

pub mod manifest;
pub mod settings;

pub use manifest::{parse_manifest, ExtensionManifest, PublishConfig, RepackedManifest};
pub use settings::Settings;

/// Name of the metadata file inside the archive and of the rewritten output.
pub const MANIFEST_FILE: &str = "package.json";

/// Name of the generated provenance document.
pub const README_FILE: &str = "README.md";

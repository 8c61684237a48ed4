//! Output rendering (package.json, README)

pub mod manifest;
pub mod readme;

pub use manifest::{render_manifest, write_manifest};
pub use readme::{render_readme, write_readme, Provenance};

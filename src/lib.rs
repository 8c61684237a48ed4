//! Repackaging of VS Code extension archives for private npm registries.

pub mod archive;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod repack;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::{RepackError, Result};
pub use repack::{build_manifest, repack_folder, RepackOutcome};

//! vsix-repack: republish VS Code extensions through a private npm registry
//!
//! Turns a folder holding a single `.vsix` into a publishable npm package
//! (`package.json` + provenance `README.md`) and prints the publish command.

use anyhow::Result;

fn main() -> Result<()> {
    vsix_repack::cli::run()
}

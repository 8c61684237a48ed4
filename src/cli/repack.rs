//! Repack command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::load_config;
use crate::render::Provenance;
use crate::repack::repack_folder;
use crate::utils::login_name;

#[derive(Args)]
pub struct RepackArgs {
    /// Folder containing a single .vsix file which will be repacked
    #[arg(value_name = "VSIX_FOLDER")]
    pub vsix_folder: PathBuf,

    /// URL of the npm repository in which the repackaged extension will be stored
    #[arg(value_name = "REPOSITORY")]
    pub repository: String,

    /// Path to config file (vsix-repack.toml or vsix-repack.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name recorded as "packaged by" in the generated README (defaults to the login name)
    #[arg(long, value_name = "NAME")]
    pub packager: Option<String>,
}

pub fn run(args: RepackArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;

    let mut settings = load_config(&cwd, args.config.as_deref())?;
    if args.packager.is_some() {
        settings.packager = args.packager;
    }

    let folder = args
        .vsix_folder
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", args.vsix_folder.display()))?;
    if !folder.is_dir() {
        anyhow::bail!("Path is not a directory: {}", folder.display());
    }

    let packager = settings.packager.clone().unwrap_or_else(login_name);
    let provenance = Provenance::now(packager);

    let outcome = repack_folder(&folder, &args.repository, &settings, &provenance)
        .with_context(|| format!("Failed to repackage {}", folder.display()))?;
    tracing::info!(
        "Wrote {} and {} ({} file(s) listed)",
        outcome.manifest_path.display(),
        outcome.readme_path.display(),
        outcome.manifest.files.len()
    );

    println!("Prepared package.json for publishing.");
    println!("Execute following command for publishing to {}:", args.repository);
    println!("cd {}; {}", cwd.display(), settings.publish_command);

    Ok(())
}

//! Command-line interface for vsix-repack

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod repack;

/// Repackage a VS Code extension (.vsix) for publishing to a private npm registry
#[derive(Parser)]
#[command(name = "vsix-repack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: repack::RepackArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    repack::run(cli.args)
}

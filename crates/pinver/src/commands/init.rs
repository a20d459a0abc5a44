//! Initialize command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use pinver_config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use tracing::info;

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    info!(path = %path.display(), "wrote configuration");

    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}

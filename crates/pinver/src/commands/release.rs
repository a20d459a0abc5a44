//! Release command.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tracing::debug;

use pinver_config::{Config, ConfigError, find_and_load_config, load_config};
use pinver_core::{Pipeline, ReleaseManager, VersionManager};
use pinver_plugin::{LastRelease, NextRelease, ReleaseContext, ReleaseType};

use super::builtin_registry;

/// Arguments for the release command.
#[derive(Debug, Args)]
pub struct ReleaseArgs {
    /// Perform a dry run without making changes
    #[arg(short, long)]
    pub dry_run: bool,

    /// Version of the last release
    #[arg(long, conflicts_with = "last_tag")]
    pub last_version: Option<String>,

    /// Git tag of the last release (e.g. v1.2.3)
    #[arg(long)]
    pub last_tag: Option<String>,

    /// Branch being released (default: from configuration)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, env = "PINVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the next release as JSON
    #[arg(long)]
    pub json: bool,
}

/// Loads the explicit configuration file, or searches for one.
///
/// Falls back to the default configuration when none is found.
fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

/// Builds the last release from the command line, if given.
fn last_release(args: &ReleaseArgs, tag_prefix: &str) -> Result<Option<LastRelease>> {
    if let Some(version) = &args.last_version {
        return Ok(Some(LastRelease::new(
            version.clone(),
            format!("{tag_prefix}{version}"),
        )));
    }

    let Some(tag) = &args.last_tag else {
        return Ok(None);
    };

    let version = VersionManager::new()
        .from_tag(tag, tag_prefix)
        .ok_or_else(|| anyhow!("tag {tag} is not a version tag with prefix '{tag_prefix}'"))?;

    Ok(Some(LastRelease::new(version.to_string(), tag.clone())))
}

fn print_release(next: &NextRelease) {
    let release_type = next.r#type.map_or("-", ReleaseType::as_str);
    println!("Next release: {} ({release_type})", next.version);

    if let Some(tag) = &next.git_tag {
        println!("Tag: {tag}");
    }

    match &next.notes {
        Some(notes) => println!("\nNotes:\n{notes}"),
        None => println!("\nNo release notes."),
    }
}

/// Runs the release command.
pub fn run(args: &ReleaseArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref())?;
    let tag_prefix = &config.release.tag_prefix;

    let pipeline = Pipeline::from_entries(&config.plugins, &builtin_registry())
        .context("failed to build plugin pipeline")?;
    debug!(plugins = ?pipeline.plugin_names().collect::<Vec<_>>(), "pipeline ready");

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let branch = args.branch.as_ref().unwrap_or(&config.release.branch);
    let mut ctx = ReleaseContext::new(cwd, branch.clone()).dry_run(args.dry_run);
    if let Some(last) = last_release(args, tag_prefix)? {
        ctx = ctx.last_release(last);
    }

    let manager = ReleaseManager::new(tag_prefix.clone());
    let next = manager
        .run(&pipeline, &mut ctx)
        .context("release lifecycle failed")?;

    match next {
        Some(next) if args.json => {
            let json = serde_json::to_string_pretty(&next).context("failed to serialize release")?;
            println!("{json}");
        }
        Some(next) => print_release(&next),
        None if args.json => println!("null"),
        None => println!("No release."),
    }

    if args.dry_run && !args.json {
        println!("\nDry run completed. No changes were made.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ReleaseArgs {
        ReleaseArgs {
            dry_run: false,
            last_version: None,
            last_tag: None,
            branch: None,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_last_release_none() {
        assert!(last_release(&args(), "v").unwrap().is_none());
    }

    #[test]
    fn test_last_release_from_version() {
        let args = ReleaseArgs {
            last_version: Some("1.2.3".to_string()),
            ..args()
        };
        let last = last_release(&args, "v").unwrap().unwrap();
        assert_eq!(last, LastRelease::new("1.2.3", "v1.2.3"));
    }

    #[test]
    fn test_last_release_from_tag() {
        let args = ReleaseArgs {
            last_tag: Some("release-2.0.1".to_string()),
            ..args()
        };
        let last = last_release(&args, "release-").unwrap().unwrap();
        assert_eq!(last, LastRelease::new("2.0.1", "release-2.0.1"));
    }

    #[test]
    fn test_last_release_from_bad_tag() {
        let args = ReleaseArgs {
            last_tag: Some("latest".to_string()),
            ..args()
        };
        assert!(last_release(&args, "v").is_err());
    }
}

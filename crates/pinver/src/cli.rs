//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Decide the next release through a chain of lifecycle plugins.
#[derive(Debug, Parser)]
#[command(name = "pinver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new pinver configuration
    Init(commands::init::InitArgs),

    /// Run the plugin lifecycle and print the next release
    Release(commands::release::ReleaseArgs),

    /// List built-in plugins
    Plugins,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(&args),
            Commands::Release(args) => commands::release::run(&args),
            Commands::Plugins => commands::plugins::run(),
        }
    }
}

//! Configuration management for Pinver.
//!
//! This crate handles loading and validating the `pinver.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, DEFAULT_CONFIG, find_and_load_config, find_and_load_config_from,
    load_config,
};
pub use schema::{Config, DEFAULT_PLUGIN, PluginEntry, ReleaseConfig};

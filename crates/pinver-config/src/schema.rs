//! Configuration schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ConfigError, ConfigResult};

/// Plugin used when the configuration lists none.
pub const DEFAULT_PLUGIN: &str = "version-override";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Release configuration.
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Plugins, in the order the host runs them.
    #[serde(default = "default_plugins")]
    pub plugins: Vec<PluginEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release: ReleaseConfig::default(),
            plugins: default_plugins(),
        }
    }
}

impl Config {
    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin entry has an empty name.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(index) = self.plugins.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "plugin #{} has an empty name",
                index + 1
            )));
        }
        Ok(())
    }
}

fn default_plugins() -> Vec<PluginEntry> {
    vec![PluginEntry::new(DEFAULT_PLUGIN)]
}

/// Release configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Tag prefix (e.g., "v").
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Branch releases are made from.
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag_prefix: default_tag_prefix(),
            branch: default_branch(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// A configured plugin.
///
/// Every key besides `name` is passed to the plugin as an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Plugin name.
    pub name: String,

    /// Plugin options.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl PluginEntry {
    /// Creates a plugin entry without options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Map::new(),
        }
    }

    /// Sets an option value.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

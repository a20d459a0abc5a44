//! Per-plugin configuration.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{PluginError, PluginResult};

/// Options configured for a single plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    options: Map<String, Value>,
}

impl PluginConfig {
    /// Creates a plugin configuration from an options map.
    #[must_use]
    pub fn new(options: Map<String, Value>) -> Self {
        Self { options }
    }

    /// Sets an option value.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Gets an option value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Gets an option as a string slice.
    ///
    /// Returns `None` when the option is absent or is not a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Returns true if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Deserializes the options into a typed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> PluginResult<T> {
        serde_json::from_value(Value::Object(self.options.clone()))
            .map_err(|e| PluginError::ConfigError(e.to_string()))
    }
}

impl From<Map<String, Value>> for PluginConfig {
    fn from(options: Map<String, Value>) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        let config = PluginConfig::default();
        assert!(config.is_empty());
        assert!(config.get("version").is_none());
    }

    #[test]
    fn test_get_str() {
        let config = PluginConfig::default().with_option("version", "9.9.9");
        assert_eq!(config.get_str("version"), Some("9.9.9"));
    }

    #[test]
    fn test_get_str_non_string() {
        let config = PluginConfig::default().with_option("version", 42);
        assert!(config.get_str("version").is_none());
        assert_eq!(config.get("version"), Some(&json!(42)));
    }

    #[test]
    fn test_from_map() {
        let Value::Object(map) = json!({"channel": "beta"}) else {
            unreachable!()
        };
        let config = PluginConfig::from(map);
        assert_eq!(config.get_str("channel"), Some("beta"));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Options {
            version: Option<String>,
        }

        let config = PluginConfig::default().with_option("version", "1.2.3");
        let options: Options = config.deserialize().unwrap();
        assert_eq!(options.version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_deserialize_mismatch() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Options {
            version: String,
        }

        let config = PluginConfig::default().with_option("version", true);
        let result = config.deserialize::<Options>();
        assert!(matches!(result, Err(PluginError::ConfigError(_))));
    }
}

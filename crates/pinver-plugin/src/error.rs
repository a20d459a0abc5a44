//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin not found.
    #[error("plugin not found: {0}")]
    NotFound(String),

    /// A release condition is not met.
    #[error("release condition not met: {0}")]
    ConditionFailed(String),

    /// Configuration error.
    #[error("plugin configuration error: {0}")]
    ConfigError(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

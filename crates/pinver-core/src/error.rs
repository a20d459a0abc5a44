//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Plugin error.
    #[error("plugin error: {0}")]
    Plugin(#[from] pinver_plugin::PluginError),

    /// Version parsing error.
    #[error("version error: {0}")]
    Version(#[from] semver::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pinver_plugin::PluginError;

    #[test]
    fn test_plugin_error_display() {
        let err = CoreError::from(PluginError::NotFound("missing".to_string()));
        assert_eq!(err.to_string(), "plugin error: plugin not found: missing");
    }

    #[test]
    fn test_version_error_from() {
        let err = CoreError::from(semver::Version::parse("nope").unwrap_err());
        assert!(err.to_string().starts_with("version error: "));
    }
}

//! Version override plugin.

use std::borrow::Cow;

use pinver_plugin::{
    LifecycleHooks, Plugin, PluginConfig, PluginResult, ReleaseContext, ReleaseType,
};
use serde_json::Value;
use tracing::debug;

/// Version used when the `version` option is not configured.
pub const FALLBACK_VERSION: &str = "2025.4.0";

/// Name of the option that overrides [`FALLBACK_VERSION`].
pub const VERSION_OPTION: &str = "version";

/// Pins the next release to a fixed version.
///
/// - Commit analysis always asks for a minor release
/// - No release notes are produced, leaving them to other plugins
/// - `verify_conditions` replaces the next release version with the
///   configured `version` option, or [`FALLBACK_VERSION`]
///
/// The chosen version is not validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionOverridePlugin;

impl VersionOverridePlugin {
    /// Creates a new version override plugin.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the version the plugin pins for the given configuration.
    ///
    /// Falsy values (absent, `null`, `""`, `0`, `false`) fall back to
    /// [`FALLBACK_VERSION`]. Any other non-string value is used in its
    /// textual form.
    #[must_use]
    pub fn resolve_version(config: &PluginConfig) -> Cow<'_, str> {
        match config.get(VERSION_OPTION) {
            Some(Value::String(version)) if !version.is_empty() => Cow::Borrowed(version),
            Some(value) if is_truthy(value) => Cow::Owned(value.to_string()),
            _ => Cow::Borrowed(FALLBACK_VERSION),
        }
    }
}

/// Follows JavaScript truthiness for option values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Plugin for VersionOverridePlugin {
    fn name(&self) -> &'static str {
        "version-override"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Forces a minor release pinned to a fixed version"
    }
}

impl LifecycleHooks for VersionOverridePlugin {
    fn verify_conditions(
        &self,
        config: &PluginConfig,
        ctx: &mut ReleaseContext,
    ) -> PluginResult<()> {
        let version = Self::resolve_version(config);
        debug!(
            previous = %ctx.next_release.version,
            %version,
            "pinning next release version"
        );

        ctx.next_release = std::mem::take(&mut ctx.next_release).with_version(version);
        Ok(())
    }

    fn analyze_commits(
        &self,
        _config: &PluginConfig,
        _ctx: &ReleaseContext,
    ) -> PluginResult<Option<ReleaseType>> {
        Ok(Some(ReleaseType::Minor))
    }

    fn generate_notes(
        &self,
        _config: &PluginConfig,
        _ctx: &ReleaseContext,
    ) -> PluginResult<String> {
        Ok(String::new())
    }
}

//! Lifecycle hook trait.

use super::Plugin;
use crate::{PluginConfig, PluginResult, ReleaseContext, ReleaseType};

/// Hooks the host calls while preparing a release.
///
/// The host runs them in this order, once per plugin:
/// 1. `verify_conditions` - Check preconditions; may adjust the context
/// 2. `analyze_commits` - Decide which kind of release is needed
/// 3. `generate_notes` - Produce release notes
///
/// Every hook has a no-op default so a plugin only implements what it uses.
pub trait LifecycleHooks: Plugin {
    /// Verifies that a release can be made.
    ///
    /// # Errors
    ///
    /// Returns an error if a release condition is not met.
    fn verify_conditions(
        &self,
        _config: &PluginConfig,
        _ctx: &mut ReleaseContext,
    ) -> PluginResult<()> {
        Ok(())
    }

    /// Determines the release type, or `None` when no release is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis fails.
    fn analyze_commits(
        &self,
        _config: &PluginConfig,
        _ctx: &ReleaseContext,
    ) -> PluginResult<Option<ReleaseType>> {
        Ok(None)
    }

    /// Generates release notes.
    ///
    /// An empty string means this plugin has no notes to contribute.
    ///
    /// # Errors
    ///
    /// Returns an error if note generation fails.
    fn generate_notes(
        &self,
        _config: &PluginConfig,
        _ctx: &ReleaseContext,
    ) -> PluginResult<String> {
        Ok(String::new())
    }
}

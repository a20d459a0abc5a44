//! Subcommands.

pub mod init;
pub mod plugins;
pub mod release;

use pinver_core::PluginRegistry;
use pinver_plugin::LifecycleHooks;
use pinver_version_override::VersionOverridePlugin;

fn create_version_override() -> Box<dyn LifecycleHooks> {
    Box::new(VersionOverridePlugin::new())
}

/// Returns the registry of plugins shipped with the binary.
pub fn builtin_registry() -> PluginRegistry {
    PluginRegistry::new().with_plugin("version-override", create_version_override)
}

//! Plugins command.

use anyhow::Result;

use super::builtin_registry;

/// Lists the built-in plugins.
pub fn run() -> Result<()> {
    let registry = builtin_registry();

    println!("Built-in plugins:");
    for name in registry.names() {
        let plugin = registry.create(name)?;
        println!("  {name} v{} - {}", plugin.version(), plugin.description());
    }

    Ok(())
}

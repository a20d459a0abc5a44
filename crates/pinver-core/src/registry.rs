//! Registry of plugins the host can instantiate by name.

use std::collections::BTreeMap;

use pinver_plugin::{LifecycleHooks, PluginError, PluginResult};

/// Creates a fresh plugin instance.
pub type PluginFactory = fn() -> Box<dyn LifecycleHooks>;

/// Maps plugin names to their factories.
#[derive(Debug, Default, Clone)]
pub struct PluginRegistry {
    factories: BTreeMap<String, PluginFactory>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin factory under the given name.
    ///
    /// A later registration with the same name replaces the earlier one.
    #[must_use]
    pub fn with_plugin(mut self, name: impl Into<String>, factory: PluginFactory) -> Self {
        self.register(name, factory);
        self
    }

    /// Registers a plugin factory under the given name.
    pub fn register(&mut self, name: impl Into<String>, factory: PluginFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Returns true if a plugin with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Instantiates the named plugin.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::NotFound`] if no plugin is registered under `name`.
    pub fn create(&self, name: &str) -> PluginResult<Box<dyn LifecycleHooks>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| PluginError::NotFound(name.to_string()))
    }

    /// Returns the registered plugin names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

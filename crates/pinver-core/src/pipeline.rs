//! Plugin pipeline execution.

use pinver_config::PluginEntry;
use pinver_plugin::{LifecycleHooks, PluginConfig, PluginResult, ReleaseContext, ReleaseType};
use tracing::{debug, info};

use crate::{CoreResult, PluginRegistry};

/// Separator between notes contributed by different plugins.
const NOTES_SEPARATOR: &str = "\n\n";

struct PipelineStep {
    plugin: Box<dyn LifecycleHooks>,
    config: PluginConfig,
}

/// Runs the lifecycle hooks of an ordered chain of plugins.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pipeline from configured plugin entries.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry names a plugin the registry does not know.
    pub fn from_entries(entries: &[PluginEntry], registry: &PluginRegistry) -> CoreResult<Self> {
        let mut pipeline = Self::new();
        for entry in entries {
            let plugin = registry.create(&entry.name)?;
            debug!(plugin = %entry.name, options = entry.options.len(), "adding plugin");
            pipeline = pipeline.with_plugin(plugin, PluginConfig::new(entry.options.clone()));
        }
        Ok(pipeline)
    }

    /// Appends a plugin with its configuration.
    #[must_use]
    pub fn with_plugin(mut self, plugin: Box<dyn LifecycleHooks>, config: PluginConfig) -> Self {
        self.steps.push(PipelineStep { plugin, config });
        self
    }

    /// Returns the number of plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the pipeline has no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the plugin names in execution order.
    pub fn plugin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|step| step.plugin.name())
    }

    /// Runs `verify_conditions` on every plugin, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first plugin error.
    pub fn verify_conditions(&self, ctx: &mut ReleaseContext) -> PluginResult<()> {
        for step in &self.steps {
            debug!(plugin = step.plugin.name(), "running verify_conditions");
            step.plugin.verify_conditions(&step.config, ctx)?;
        }
        Ok(())
    }

    /// Runs `analyze_commits` on every plugin and keeps the highest release type.
    ///
    /// # Errors
    ///
    /// Returns the first plugin error.
    pub fn analyze_commits(&self, ctx: &ReleaseContext) -> PluginResult<Option<ReleaseType>> {
        let mut release_type: Option<ReleaseType> = None;

        for step in &self.steps {
            debug!(plugin = step.plugin.name(), "running analyze_commits");
            let Some(found) = step.plugin.analyze_commits(&step.config, ctx)? else {
                continue;
            };

            info!(plugin = step.plugin.name(), release_type = %found, "plugin requested a release");
            release_type = Some(release_type.map_or(found, |current| current.max(found)));
        }

        Ok(release_type)
    }

    /// Runs `generate_notes` on every plugin and joins the non-empty results.
    ///
    /// # Errors
    ///
    /// Returns the first plugin error.
    pub fn generate_notes(&self, ctx: &ReleaseContext) -> PluginResult<String> {
        let mut notes = Vec::new();

        for step in &self.steps {
            debug!(plugin = step.plugin.name(), "running generate_notes");
            let generated = step.plugin.generate_notes(&step.config, ctx)?;
            if !generated.is_empty() {
                notes.push(generated);
            }
        }

        Ok(notes.join(NOTES_SEPARATOR))
    }
}

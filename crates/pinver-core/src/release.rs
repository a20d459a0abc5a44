//! Release orchestration.

use pinver_plugin::{NextRelease, ReleaseContext};
use tracing::{debug, info};

use crate::{CoreResult, Pipeline, VersionManager};

/// Manages the release process.
pub struct ReleaseManager {
    version_manager: VersionManager,
    tag_prefix: String,
}

impl ReleaseManager {
    /// Creates a new release manager.
    #[must_use]
    pub fn new(tag_prefix: impl Into<String>) -> Self {
        Self {
            version_manager: VersionManager::new(),
            tag_prefix: tag_prefix.into(),
        }
    }

    /// Returns the tag prefix.
    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    /// Runs the plugin lifecycle and decides the next release.
    ///
    /// Returns `None` when no plugin asks for a release. A version set on
    /// `ctx.next_release` while verifying conditions is kept; otherwise the
    /// version is computed from the last release.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin fails or the last release version is
    /// not valid semver.
    pub fn run(
        &self,
        pipeline: &Pipeline,
        ctx: &mut ReleaseContext,
    ) -> CoreResult<Option<NextRelease>> {
        info!(branch = %ctx.branch, dry_run = ctx.dry_run, "starting release process");

        pipeline.verify_conditions(ctx)?;
        debug!(version = %ctx.next_release.version, "conditions verified");

        let Some(release_type) = pipeline.analyze_commits(ctx)? else {
            info!("no release requested");
            return Ok(None);
        };
        ctx.next_release.r#type = Some(release_type);

        if ctx.next_release.has_version() {
            info!(version = %ctx.next_release.version, "using version set by plugins");
        } else {
            let next = self
                .version_manager
                .next_version(ctx.last_release.as_ref(), release_type)?;
            info!(
                previous = ?ctx.last_release.as_ref().map(|last| &last.version),
                next = %next,
                %release_type,
                "calculated new version"
            );
            ctx.next_release.version = next.to_string();
        }

        let tag = format!("{}{}", self.tag_prefix, ctx.next_release.version);
        ctx.next_release.name = Some(tag.clone());
        ctx.next_release.git_tag = Some(tag);

        let notes = pipeline.generate_notes(ctx)?;
        debug!(notes_len = notes.len(), "generated notes");
        if !notes.is_empty() {
            ctx.next_release.notes = Some(notes);
        }

        info!(version = %ctx.next_release.version, "release prepared");
        Ok(Some(ctx.next_release.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinver_plugin::{
        LastRelease, LifecycleHooks, Plugin, PluginConfig, PluginResult, ReleaseType,
    };

    struct FixedType(Option<ReleaseType>);

    impl Plugin for FixedType {
        fn name(&self) -> &'static str {
            "fixed-type"
        }
        fn version(&self) -> &'static str {
            "1.0.0"
        }
    }

    impl LifecycleHooks for FixedType {
        fn analyze_commits(
            &self,
            _config: &PluginConfig,
            _ctx: &ReleaseContext,
        ) -> PluginResult<Option<ReleaseType>> {
            Ok(self.0)
        }
    }

    fn pipeline(release_type: Option<ReleaseType>) -> Pipeline {
        Pipeline::new().with_plugin(Box::new(FixedType(release_type)), PluginConfig::default())
    }

    #[test]
    fn test_no_release() {
        let manager = ReleaseManager::new("v");
        let mut ctx = ReleaseContext::new("/tmp", "main");

        let result = manager.run(&pipeline(None), &mut ctx).unwrap();
        assert!(result.is_none());
        assert!(ctx.next_release.r#type.is_none());
    }

    #[test]
    fn test_first_release() {
        let manager = ReleaseManager::new("v");
        let mut ctx = ReleaseContext::new("/tmp", "main");

        let next = manager
            .run(&pipeline(Some(ReleaseType::Minor)), &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!(next.version, "1.0.0");
        assert_eq!(next.git_tag.as_deref(), Some("v1.0.0"));
        assert_eq!(next.name.as_deref(), Some("v1.0.0"));
        assert_eq!(next.r#type, Some(ReleaseType::Minor));
        assert!(next.notes.is_none());
    }

    #[test]
    fn test_bumps_last_release() {
        let manager = ReleaseManager::new("release-");
        let mut ctx = ReleaseContext::new("/tmp", "main")
            .last_release(LastRelease::new("1.4.2", "release-1.4.2"));

        let next = manager
            .run(&pipeline(Some(ReleaseType::Patch)), &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!(next.version, "1.4.3");
        assert_eq!(next.git_tag.as_deref(), Some("release-1.4.3"));
        assert_eq!(ctx.next_release, next);
    }

    #[test]
    fn test_invalid_last_release() {
        let manager = ReleaseManager::new("v");
        let mut ctx = ReleaseContext::new("/tmp", "main")
            .last_release(LastRelease::new("garbage", "vgarbage"));

        let result = manager.run(&pipeline(Some(ReleaseType::Patch)), &mut ctx);
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_prefix() {
        let manager = ReleaseManager::new("v");
        assert_eq!(manager.tag_prefix(), "v");
    }
}

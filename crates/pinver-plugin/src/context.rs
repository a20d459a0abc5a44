//! Release context shared between plugins.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ReleaseType;

/// The release published before this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRelease {
    /// The released version.
    pub version: String,

    /// The git tag of the release.
    pub git_tag: String,

    /// The commit the release was cut from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_head: Option<String>,
}

impl LastRelease {
    /// Creates a last release record.
    #[must_use]
    pub fn new(version: impl Into<String>, git_tag: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            git_tag: git_tag.into(),
            git_head: None,
        }
    }
}

/// The release being prepared.
///
/// Fields the host does not model are kept in `extra` so plugins can pass
/// them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRelease {
    /// The release type decided by commit analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ReleaseType>,

    /// The version to publish. Empty until a plugin or the host sets it.
    #[serde(default)]
    pub version: String,

    /// The git tag for the release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_tag: Option<String>,

    /// The release name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The release notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The distribution channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Any other fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NextRelease {
    /// Creates a next release with the given version and nothing else.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Returns a copy of this release with `version` replaced.
    ///
    /// Every other field is kept as is.
    #[must_use]
    pub fn with_version(self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self
        }
    }

    /// Sets the release notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns true once a version has been decided.
    #[must_use]
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

/// Host-owned state passed to every hook during a release.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Working directory of the release.
    pub cwd: PathBuf,

    /// The branch being released.
    pub branch: String,

    /// The previous release, if any.
    pub last_release: Option<LastRelease>,

    /// The release being prepared.
    pub next_release: NextRelease,

    /// Whether this is a dry run (no actual changes).
    pub dry_run: bool,

    /// Arbitrary metadata for inter-plugin communication.
    pub metadata: HashMap<String, Value>,
}

impl ReleaseContext {
    /// Creates a new release context.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>, branch: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            branch: branch.into(),
            last_release: None,
            next_release: NextRelease::default(),
            dry_run: false,
            metadata: HashMap::new(),
        }
    }

    /// Sets the previous release.
    #[must_use]
    pub fn last_release(mut self, last_release: LastRelease) -> Self {
        self.last_release = Some(last_release);
        self
    }

    /// Sets the release being prepared.
    #[must_use]
    pub fn next_release(mut self, next_release: NextRelease) -> Self {
        self.next_release = next_release;
        self
    }

    /// Sets the dry run flag.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Gets a metadata value.
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Sets a metadata value.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_context() -> ReleaseContext {
        ReleaseContext::new("/tmp/test-repo", "main")
    }

    #[test]
    fn test_new() {
        let ctx = create_context();
        assert_eq!(ctx.cwd.to_string_lossy(), "/tmp/test-repo");
        assert_eq!(ctx.branch, "main");
        assert!(ctx.last_release.is_none());
        assert!(!ctx.next_release.has_version());
        assert!(!ctx.dry_run);
        assert!(ctx.metadata.is_empty());
    }

    #[test]
    fn test_builders() {
        let ctx = create_context()
            .last_release(LastRelease::new("1.0.0", "v1.0.0"))
            .next_release(NextRelease::new("1.1.0"))
            .dry_run(true);
        assert_eq!(ctx.last_release.unwrap().git_tag, "v1.0.0");
        assert_eq!(ctx.next_release.version, "1.1.0");
        assert!(ctx.dry_run);
    }

    #[test]
    fn test_set_and_get_metadata() {
        let mut ctx = create_context();
        ctx.set_metadata("key", json!("value"));
        assert_eq!(ctx.get_metadata("key"), Some(&json!("value")));
        assert!(ctx.get_metadata("other").is_none());
    }

    #[test]
    fn test_with_version_keeps_other_fields() {
        let mut release = NextRelease::new("1.0.0").with_notes("x");
        release.channel = Some("beta".to_string());
        release.extra.insert("gitHead".to_string(), json!("abc123"));

        let updated = release.clone().with_version("2.0.0");
        assert_eq!(updated.version, "2.0.0");
        assert_eq!(updated.notes, release.notes);
        assert_eq!(updated.channel, release.channel);
        assert_eq!(updated.extra, release.extra);
    }

    #[test]
    fn test_next_release_serialize() {
        let release = NextRelease {
            r#type: Some(ReleaseType::Minor),
            git_tag: Some("v1.1.0".to_string()),
            ..NextRelease::new("1.1.0")
        };
        let value = serde_json::to_value(&release).unwrap();
        assert_eq!(
            value,
            json!({"type": "minor", "version": "1.1.0", "gitTag": "v1.1.0"})
        );
    }

    #[test]
    fn test_next_release_deserialize_unknown_fields() {
        let release: NextRelease =
            serde_json::from_value(json!({"version": "1.0.0", "notes": "x", "gitHead": "abc"}))
                .unwrap();
        assert_eq!(release.version, "1.0.0");
        assert_eq!(release.notes.as_deref(), Some("x"));
        assert_eq!(release.extra.get("gitHead"), Some(&json!("abc")));
    }
}

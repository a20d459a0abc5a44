//! Version management.

use pinver_plugin::{LastRelease, ReleaseType};
use semver::Version;

/// Version of the first release when nothing was released before.
pub const FIRST_RELEASE: Version = Version::new(1, 0, 0);

/// Manages version operations.
pub struct VersionManager;

impl VersionManager {
    /// Creates a new version manager.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Bumps a version according to the release type.
    #[must_use]
    pub fn bump(&self, version: &Version, release_type: ReleaseType) -> Version {
        let mut new_version = version.clone();

        match release_type {
            ReleaseType::Major => {
                new_version.major += 1;
                new_version.minor = 0;
                new_version.patch = 0;
            }
            ReleaseType::Minor => {
                new_version.minor += 1;
                new_version.patch = 0;
            }
            ReleaseType::Patch => {
                new_version.patch += 1;
            }
        }
        new_version.pre = semver::Prerelease::EMPTY;
        new_version.build = semver::BuildMetadata::EMPTY;

        new_version
    }

    /// Computes the version following the last release.
    ///
    /// # Errors
    ///
    /// Returns an error if the last release version is not valid semver.
    pub fn next_version(
        &self,
        last_release: Option<&LastRelease>,
        release_type: ReleaseType,
    ) -> Result<Version, semver::Error> {
        match last_release {
            Some(last) => Ok(self.bump(&self.parse(&last.version)?, release_type)),
            None => Ok(FIRST_RELEASE),
        }
    }

    /// Parses a version string.
    ///
    /// # Errors
    ///
    /// Returns an error if the version string is invalid.
    pub fn parse(&self, version: &str) -> Result<Version, semver::Error> {
        Version::parse(version)
    }

    /// Extracts version from a tag string.
    #[must_use]
    pub fn from_tag(&self, tag: &str, prefix: &str) -> Option<Version> {
        let version_str = tag.strip_prefix(prefix)?;
        Version::parse(version_str).ok()
    }
}

impl Default for VersionManager {
    fn default() -> Self {
        Self::new()
    }
}

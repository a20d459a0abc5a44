//! Release type returned by commit analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of release requested by a plugin.
///
/// "No release" is expressed as `None` at the hook boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Major release (breaking changes).
    Major,
    /// Minor release (new features).
    Minor,
    /// Patch release (bug fixes).
    Patch,
}

impl ReleaseType {
    /// Returns true if this release type is greater than another.
    #[must_use]
    pub fn is_greater_than(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Major, Self::Minor | Self::Patch) | (Self::Minor, Self::Patch)
        )
    }

    /// Returns the maximum of two release types.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.is_greater_than(other) {
            self
        } else {
            other
        }
    }

    /// Returns the lowercase name used on the plugin boundary.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known release type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown release type: {0}")]
pub struct ParseReleaseTypeError(String);

impl FromStr for ReleaseType {
    type Err = ParseReleaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(ParseReleaseTypeError(other.to_string())),
        }
    }
}

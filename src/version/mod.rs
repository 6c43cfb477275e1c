//! Version values used for compatibility checks
//!
//! [`SemanticVersion`] wraps [`semver::Version`] with an ordering that only
//! looks at major, minor, patch and pre-release, so build metadata never
//! changes the outcome of a range check. [`ConfigVersionRange`] is an
//! inclusive, named `min..=max` window.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfsyncError, Result};

/// Floor version assumed for configuration bundles that carry no manifest.
///
/// This is the first release whose configuration schema was shipped, shared by
/// the compatibility check and by manifest defaults.
pub const BASELINE_CONFIG_VERSION: [u64; 3] = [0, 3, 6];

/// A parsed `major.minor.patch[-pre][+build]` version
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    /// Parse a dotted version string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        semver::Version::parse(trimmed)
            .map(Self)
            .map_err(|e| crate::error::version::parse_failed(input, e.to_string()))
    }

    /// The baseline version used for unstamped bundles
    pub fn baseline() -> Self {
        let [major, minor, patch] = BASELINE_CONFIG_VERSION;
        Self(semver::Version::new(major, minor, patch))
    }

    /// Create a version from numeric parts
    #[cfg(test)]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .major
            .cmp(&other.0.major)
            .then(self.0.minor.cmp(&other.0.minor))
            .then(self.0.patch.cmp(&other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SemanticVersion {
    type Err = ConfsyncError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = ConfsyncError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SemanticVersion> for String {
    fn from(value: SemanticVersion) -> Self {
        value.to_string()
    }
}

/// A named, inclusive range of software versions a configuration bundle supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigVersionRange {
    pub name: String,
    pub description: String,
    min_version: SemanticVersion,
    max_version: SemanticVersion,
}

impl ConfigVersionRange {
    /// Create a range, rejecting `min_version > max_version`
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        min_version: SemanticVersion,
        max_version: SemanticVersion,
    ) -> Result<Self> {
        let name = name.into();
        if min_version > max_version {
            return Err(crate::error::config::invalid(format!(
                "range '{name}' has min_version {min_version} above max_version {max_version}"
            )));
        }
        Ok(Self {
            name,
            description: description.into(),
            min_version,
            max_version,
        })
    }

    pub fn min_version(&self) -> &SemanticVersion {
        &self.min_version
    }

    pub fn max_version(&self) -> &SemanticVersion {
        &self.max_version
    }

    /// True iff `min_version <= version <= max_version`
    pub fn contains(&self, version: &SemanticVersion) -> bool {
        &self.min_version <= version && version <= &self.max_version
    }
}

impl fmt::Display for ConfigVersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min_version, self.max_version)
    }
}

//! Manifest (`version.json`) handling
//!
//! The manifest records which configuration version a bundle was stamped with.
//! Reference bundles additionally declare the software versions they support,
//! either as a flat `min_version`/`max_version` pair or as a table of named
//! `config_version_ranges`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version::{ConfigVersionRange, SemanticVersion};

/// Manifest filename, always at the bundle root
pub const MANIFEST_FILE: &str = "version.json";

/// One entry of the `config_version_ranges` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDeclaration {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_version: String,
    pub max_version: String,
}

impl RangeDeclaration {
    /// Parse the declared bounds into a validated range
    pub fn to_range(&self) -> Result<ConfigVersionRange> {
        ConfigVersionRange::new(
            self.name.clone(),
            self.description.clone(),
            SemanticVersion::parse(&self.min_version)?,
            SemanticVersion::parse(&self.max_version)?,
        )
    }
}

/// Bundle manifest (version.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Version the bundle was stamped with. Older tools wrote this as `version`.
    #[serde(default, alias = "version", skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config_version_ranges: Vec<RangeDeclaration>,
}

impl VersionManifest {
    /// Manifest stamped with a configuration version and, when known, the range it was checked against
    pub fn stamped(config_version: &SemanticVersion, range: Option<&ConfigVersionRange>) -> Self {
        Self {
            config_version: Some(config_version.to_string()),
            min_version: range.map(|r| r.min_version().to_string()),
            max_version: range.map(|r| r.max_version().to_string()),
            config_version_ranges: Vec::new(),
        }
    }

    /// Parse a manifest from JSON, naming `path` in errors
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::manifest::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Serialize manifest to pretty-printed JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Load the manifest of a bundle
    ///
    /// Returns `Ok(None)` when the bundle has no manifest. Unreadable or
    /// malformed manifests are errors.
    pub fn load(bundle_root: &Path) -> Result<Option<Self>> {
        let path = manifest_path(bundle_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::config::read_failed(path.display().to_string(), e.to_string())
        })?;

        Self::from_json(&content, &path).map(Some)
    }

    /// The stamped configuration version, or the baseline when none is recorded
    pub fn config_version(&self) -> Result<SemanticVersion> {
        match self.config_version.as_deref() {
            Some(version) => SemanticVersion::parse(version),
            None => Ok(SemanticVersion::baseline()),
        }
    }
}

/// Path of the manifest inside a bundle
pub fn manifest_path(bundle_root: &Path) -> PathBuf {
    bundle_root.join(MANIFEST_FILE)
}

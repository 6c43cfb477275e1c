//! Version ranges declared by the shipped reference bundle

use std::path::Path;

use crate::config::manifest::{VersionManifest, manifest_path};
use crate::error::Result;
use crate::version::{ConfigVersionRange, SemanticVersion};

/// Name given to the range synthesized from a flat `min_version`/`max_version` manifest
pub const DEFAULT_RANGE_NAME: &str = "default";

/// The ordered set of ranges a reference bundle is compatible with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRangeRegistry {
    ranges: Vec<ConfigVersionRange>,
}

impl VersionRangeRegistry {
    /// Load the range declarations of a reference bundle
    ///
    /// A reference bundle without a manifest is a broken installation and
    /// fails with `ManifestMissing`.
    pub fn load(reference_root: &Path) -> Result<Self> {
        let manifest = VersionManifest::load(reference_root)?.ok_or_else(|| {
            crate::error::manifest::missing(manifest_path(reference_root).display().to_string())
        })?;
        Self::from_manifest(&manifest)
    }

    /// Build the registry from an already parsed reference manifest
    ///
    /// `config_version_ranges` wins when present. Otherwise a single range is
    /// built from `min_version` (default: baseline) and `max_version`
    /// (default: the manifest's own `config_version`).
    pub fn from_manifest(manifest: &VersionManifest) -> Result<Self> {
        let config_version = manifest.config_version()?;

        let ranges = if manifest.config_version_ranges.is_empty() {
            let min_version = match manifest.min_version.as_deref() {
                Some(v) => SemanticVersion::parse(v)?,
                None => SemanticVersion::baseline(),
            };
            let max_version = match manifest.max_version.as_deref() {
                Some(v) => SemanticVersion::parse(v)?,
                None => config_version.clone(),
            };
            vec![ConfigVersionRange::new(
                DEFAULT_RANGE_NAME,
                "",
                min_version,
                max_version,
            )?]
        } else {
            manifest
                .config_version_ranges
                .iter()
                .map(|decl| decl.to_range())
                .collect::<Result<Vec<_>>>()?
        };

        tracing::debug!(
            config_version = %config_version,
            ranges = ranges.len(),
            "loaded reference version ranges"
        );

        Ok(Self { ranges })
    }

    /// Registry over explicit ranges
    #[cfg(test)]
    pub fn from_ranges(ranges: Vec<ConfigVersionRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ConfigVersionRange] {
        &self.ranges
    }

    /// First range, in declaration order, containing `software_version`
    pub fn resolve(&self, software_version: &SemanticVersion) -> Option<&ConfigVersionRange> {
        resolve_range_for(software_version, &self.ranges)
    }
}

/// First range, in declaration order, containing `version`
pub fn resolve_range_for<'a>(
    version: &SemanticVersion,
    ranges: &'a [ConfigVersionRange],
) -> Option<&'a ConfigVersionRange> {
    ranges.iter().find(|range| range.contains(version))
}

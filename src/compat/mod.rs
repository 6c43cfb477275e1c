//! Compatibility check between the running software and a user bundle
//!
//! The check reads at most one file (the user manifest) and never writes, so
//! it is safe to run as often as needed.

use std::fmt;
use std::path::Path;

use crate::config::{VersionManifest, VersionRangeRegistry};
use crate::error::Result;
use crate::version::{ConfigVersionRange, SemanticVersion};

/// Why a user bundle needs reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReason {
    /// No declared range contains the running software version
    NoApplicableRange,
    /// The user bundle has no manifest
    UnstampedBundle,
    /// The stamped configuration version lies outside the applicable range
    VersionOutOfRange,
}

impl fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UpdateReason::NoApplicableRange => {
                "no configuration range supports this software version"
            }
            UpdateReason::UnstampedBundle => "the configuration bundle has no version manifest",
            UpdateReason::VersionOutOfRange => {
                "the configuration version is outside the supported range"
            }
        };
        f.write_str(text)
    }
}

/// Result of a compatibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate {
        config_version: SemanticVersion,
        range: ConfigVersionRange,
    },
    UpdateRequired {
        reason: UpdateReason,
        /// Stamped version, or the baseline for unstamped bundles
        config_version: SemanticVersion,
        /// Range matching the software version, when one exists
        current_range: Option<ConfigVersionRange>,
    },
}

impl CheckOutcome {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckOutcome::UpToDate { .. })
    }

    /// Range matching the software version, if any
    pub fn range(&self) -> Option<&ConfigVersionRange> {
        match self {
            CheckOutcome::UpToDate { range, .. } => Some(range),
            CheckOutcome::UpdateRequired { current_range, .. } => current_range.as_ref(),
        }
    }

    pub fn config_version(&self) -> &SemanticVersion {
        match self {
            CheckOutcome::UpToDate { config_version, .. }
            | CheckOutcome::UpdateRequired { config_version, .. } => config_version,
        }
    }
}

/// Decides whether a user bundle is compatible with the running software
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityChecker<'a> {
    registry: &'a VersionRangeRegistry,
}

impl<'a> CompatibilityChecker<'a> {
    pub fn new(registry: &'a VersionRangeRegistry) -> Self {
        Self { registry }
    }

    /// Check the bundle at `user_root` against `software_version`
    ///
    /// Decision order: no applicable range, then unstamped bundle, then range
    /// containment of the stamped version. Errors only for unreadable or
    /// malformed manifests.
    pub fn check(
        &self,
        software_version: &SemanticVersion,
        user_root: &Path,
    ) -> Result<CheckOutcome> {
        let manifest = VersionManifest::load(user_root)?;
        let config_version = match &manifest {
            Some(manifest) => manifest.config_version()?,
            None => SemanticVersion::baseline(),
        };

        let Some(range) = self.registry.resolve(software_version) else {
            tracing::debug!(software = %software_version, "no applicable configuration range");
            return Ok(CheckOutcome::UpdateRequired {
                reason: UpdateReason::NoApplicableRange,
                config_version,
                current_range: None,
            });
        };

        if manifest.is_none() {
            return Ok(CheckOutcome::UpdateRequired {
                reason: UpdateReason::UnstampedBundle,
                config_version,
                current_range: Some(range.clone()),
            });
        }

        tracing::debug!(
            software = %software_version,
            config = %config_version,
            range = %range.name,
            "checking configuration version against range"
        );

        if range.contains(&config_version) {
            Ok(CheckOutcome::UpToDate {
                config_version,
                range: range.clone(),
            })
        } else {
            Ok(CheckOutcome::UpdateRequired {
                reason: UpdateReason::VersionOutOfRange,
                config_version,
                current_range: Some(range.clone()),
            })
        }
    }
}

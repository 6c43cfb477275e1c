//! Rendering of check outcomes and reconcile results

use std::path::{Path, PathBuf};

use crate::common::fs::display_relative;
use crate::compat::{CheckOutcome, UpdateReason};
use crate::reconcile::ReconcileReport;
use crate::version::SemanticVersion;

use super::Reporter;

/// Describe a compatibility check result
pub fn display_outcome(
    reporter: &mut dyn Reporter,
    software_version: &SemanticVersion,
    outcome: &CheckOutcome,
) {
    match outcome {
        CheckOutcome::UpToDate {
            config_version,
            range,
        } => {
            reporter.success(&format!(
                "Configuration files are up to date (configs version {config_version}, range '{}' {range}).",
                range.name
            ));
        }
        CheckOutcome::UpdateRequired {
            reason,
            config_version,
            current_range,
        } => {
            reporter.warn("Configuration update required!");
            reporter.info(&format!("Current confsync version: {software_version}"));
            match reason {
                UpdateReason::UnstampedBundle => reporter.info(&format!(
                    "Configs version: unknown (no manifest, assuming {config_version})"
                )),
                _ => reporter.info(&format!("Configs version: {config_version}")),
            }
            reporter.info(&format!("Reason: {reason}"));
            match current_range {
                Some(range) => reporter.info(&format!(
                    "The currently applicable version range for the configuration files is from {} to {}.",
                    range.min_version(),
                    range.max_version()
                )),
                None => reporter.info(&format!(
                    "No configuration version range declares support for confsync {software_version}."
                )),
            }
        }
    }
}

/// Numbered list of files added to the user bundle, followed by any skips and failures
pub fn display_reconcile_report(reporter: &mut dyn Reporter, report: &ReconcileReport) {
    let copied: Vec<&Path> = report.copied().collect();
    if copied.is_empty() {
        reporter.info("No new configuration files were added.");
    } else {
        reporter.info("");
        reporter.info("List of newly added files:");
        display_numbered(reporter, copied);
    }

    let skipped = report.skipped().count();
    if skipped > 0 {
        reporter.info(&format!(
            "{skipped} file(s) appeared while updating and were left unchanged."
        ));
    }

    let failed = report.failure_count();
    if failed > 0 {
        reporter.error(&format!("{failed} file(s) could not be added:"));
        for (path, err) in report.failures() {
            reporter.error(&format!("   {}: {err}", display_relative(path)));
        }
    }
}

/// Numbered list of files a reconcile would add
pub fn display_pending_files(reporter: &mut dyn Reporter, missing: &[PathBuf]) {
    if missing.is_empty() {
        reporter.info("No configuration files are missing.");
        return;
    }
    reporter.info("");
    reporter.info("Files that would be added:");
    display_numbered(reporter, missing.iter().map(PathBuf::as_path));
}

fn display_numbered<'a>(reporter: &mut dyn Reporter, paths: impl IntoIterator<Item = &'a Path>) {
    for (i, path) in paths.into_iter().enumerate() {
        reporter.success(&format!("   {:2}. {}", i + 1, display_relative(path)));
    }
}

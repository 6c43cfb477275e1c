//! Check-config command implementation
//!
//! Runs the compatibility check and, when the user bundle is out of date,
//! adds files that are new in the reference bundle and restamps the manifest.

use crate::cli::CheckConfigArgs;
use crate::commands::Context;
use crate::compat::CompatibilityChecker;
use crate::config::{VersionManifest, VersionRangeRegistry};
use crate::error::Result;
use crate::reconcile::FileReconciler;
use crate::stamper;
use crate::ui::Reporter;
use crate::ui::display::{display_outcome, display_pending_files, display_reconcile_report};
use crate::workspace::Project;

/// Run check-config command
pub fn run(ctx: &Context, args: &CheckConfigArgs, reporter: &mut dyn Reporter) -> Result<()> {
    let project = Project::discover(&ctx.start_dir)?;
    let reference = ctx.reference_dir()?;
    let registry = VersionRangeRegistry::load(&reference)?;

    let outcome = CompatibilityChecker::new(&registry)
        .check(&ctx.software_version, &project.configs_dir)?;
    tracing::debug!(
        project = %project.root.display(),
        config = %outcome.config_version(),
        up_to_date = outcome.is_up_to_date(),
        "compatibility check finished"
    );
    display_outcome(reporter, &ctx.software_version, &outcome);
    if outcome.is_up_to_date() {
        return Ok(());
    }
    if outcome.range().is_none() {
        for range in registry.ranges() {
            reporter.info(&format!("   {}: {range}", range.name));
        }
    }

    let reconciler = FileReconciler::new(&reference, &project.configs_dir);
    let missing = reconciler.find_missing_files()?;

    if args.dry_run {
        display_pending_files(reporter, &missing);
        return Ok(());
    }

    let report = reconciler.copy_missing_files(&missing, reporter);
    display_reconcile_report(reporter, &report);

    // Leave the old stamp so the next run retries the failed files
    let failures = report.failure_count();
    if failures > 0 {
        return Err(crate::error::fs::reconcile_incomplete(failures));
    }

    let manifest = VersionManifest::stamped(&ctx.software_version, outcome.range());
    stamper::write_manifest(&project.configs_dir, &manifest)?;
    reporter.success(&format!(
        "Configuration version updated to {}.",
        ctx.software_version
    ));

    Ok(())
}

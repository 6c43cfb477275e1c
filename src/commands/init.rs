//! Init command implementation

use crate::commands::Context;
use crate::error::Result;
use crate::stamper;
use crate::ui::Reporter;
use crate::workspace::Project;

/// Create `configs/` in the project directory from the reference bundle
///
/// An existing bundle is left untouched; `check-config` is the way to bring
/// it up to date.
pub fn run(ctx: &Context, reporter: &mut dyn Reporter) -> Result<()> {
    let project = Project::at(&ctx.start_dir);
    if project.is_initialized() {
        reporter.warn(&format!(
            "Project already initialized: {}. Run 'confsync check-config' to add new files.",
            project.configs_dir.display()
        ));
        return Ok(());
    }

    let reference = ctx.reference_dir()?;
    let manifest =
        stamper::initialize_from_scratch(&reference, &project.configs_dir, &ctx.software_version)?;

    reporter.success(&format!(
        "Initialized configuration bundle in {}",
        project.configs_dir.display()
    ));
    match (&manifest.min_version, &manifest.max_version) {
        (Some(min), Some(max)) => reporter.info(&format!(
            "Configs version: {} (supported range {min} to {max})",
            ctx.software_version
        )),
        _ => reporter.warn(&format!(
            "No configuration version range declares support for confsync {}.",
            ctx.software_version
        )),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MANIFEST_FILE, VersionManifest};
    use crate::error::ConfsyncError;
    use crate::test_fixtures::{RecordingReporter, create_bundle, create_temp_dir, read_file};

    const REFERENCE_MANIFEST: &str = r#"{"config_version": "1.2.0", "min_version": "1.2.0", "max_version": "1.9.9"}"#;

    #[test]
    fn test_init_creates_stamped_bundle() {
        let temp = create_temp_dir();
        let reference = create_bundle(
            temp.path(),
            "reference",
            &[
                (MANIFEST_FILE, REFERENCE_MANIFEST),
                ("app.json", "{}"),
                ("profiles/dev.json", "{}"),
            ],
        );
        let project = create_bundle(temp.path(), "project", &[]);
        let mut reporter = RecordingReporter::default();

        run(&Context::for_test(&project, &reference, "1.4.0"), &mut reporter).unwrap();

        assert_eq!(read_file(&project, "configs/app.json"), "{}");
        assert_eq!(read_file(&project, "configs/profiles/dev.json"), "{}");
        let manifest = VersionManifest::load(&project.join("configs")).unwrap().unwrap();
        assert_eq!(manifest.config_version.as_deref(), Some("1.4.0"));
        assert!(reporter.contains("Initialized configuration bundle"));
        assert!(reporter.contains("supported range 1.2.0 to 1.9.9"));
    }

    #[test]
    fn test_init_twice_warns_and_keeps_files() {
        let temp = create_temp_dir();
        let reference = create_bundle(
            temp.path(),
            "reference",
            &[(MANIFEST_FILE, REFERENCE_MANIFEST), ("app.json", "{}")],
        );
        let project = create_bundle(temp.path(), "project", &[("configs/app.json", "edited")]);
        let mut reporter = RecordingReporter::default();

        run(&Context::for_test(&project, &reference, "1.4.0"), &mut reporter).unwrap();

        assert_eq!(read_file(&project, "configs/app.json"), "edited");
        assert!(!project.join("configs").join(MANIFEST_FILE).exists());
        assert!(reporter.contains("WARN Project already initialized"));
    }

    #[test]
    fn test_init_without_matching_range_warns() {
        let temp = create_temp_dir();
        let reference = create_bundle(
            temp.path(),
            "reference",
            &[(MANIFEST_FILE, REFERENCE_MANIFEST), ("app.json", "{}")],
        );
        let project = create_bundle(temp.path(), "project", &[]);
        let mut reporter = RecordingReporter::default();

        run(&Context::for_test(&project, &reference, "2.0.0"), &mut reporter).unwrap();

        assert!(project.join("configs/app.json").exists());
        assert!(reporter.contains("WARN No configuration version range"));
    }

    #[test]
    fn test_init_with_broken_reference_fails() {
        let temp = create_temp_dir();
        let reference = create_bundle(temp.path(), "reference", &[("app.json", "{}")]);
        let project = create_bundle(temp.path(), "project", &[]);
        let mut reporter = RecordingReporter::default();

        let err = run(&Context::for_test(&project, &reference, "1.4.0"), &mut reporter)
            .unwrap_err();

        assert!(matches!(err, ConfsyncError::ManifestMissing { .. }));
        assert!(!project.join("configs").exists());
    }
}

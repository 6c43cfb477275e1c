//! confsync - configuration bundle version manager
//!
//! Keeps a project's `configs/` directory compatible with the installed release:
//! checks the stamped configuration version against the ranges shipped in the
//! reference bundle and adds files that are new in this release without
//! touching anything the user already has.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod compat;
mod config;
mod error;
mod reconcile;
mod stamper;
mod ui;
mod version;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::Context;
use error::{ConfsyncError, Result};
use ui::{ConsoleReporter, QuietReporter, Reporter};

/// Install the diagnostic log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output and
/// everything below warnings is dropped.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli, reporter: &mut dyn Reporter) -> Result<()> {
    match &cli.command {
        Commands::Init => commands::init::run(&Context::from_cli(cli)?, reporter),
        Commands::CheckConfig(args) => {
            commands::check_config::run(&Context::from_cli(cli)?, args, reporter)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn report_error(err: &ConfsyncError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut reporter: Box<dyn Reporter> = if cli.quiet {
        Box::new(QuietReporter)
    } else {
        Box::new(ConsoleReporter)
    };

    if let Err(e) = run(&cli, reporter.as_mut()) {
        report_error(&e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MANIFEST_FILE;
    use crate::test_fixtures::{RecordingReporter, create_bundle, create_temp_dir};

    #[test]
    fn test_run_dispatches_init() {
        let temp = create_temp_dir();
        let reference = create_bundle(
            temp.path(),
            "reference",
            &[(MANIFEST_FILE, r#"{"config_version": "0.4.0"}"#), ("app.json", "{}")],
        );
        let project = create_bundle(temp.path(), "project", &[]);
        let cli = Cli::try_parse_from([
            "confsync",
            "-w",
            project.to_str().unwrap(),
            "-r",
            reference.to_str().unwrap(),
            "--software-version",
            "0.4.0",
            "init",
        ])
        .unwrap();
        let mut reporter = RecordingReporter::default();

        run(&cli, &mut reporter).unwrap();

        assert!(project.join("configs/app.json").exists());
    }

    #[test]
    fn test_run_check_config_without_project_fails() {
        let temp = create_temp_dir();
        let cli = Cli::try_parse_from([
            "confsync",
            "-w",
            temp.path().to_str().unwrap(),
            "check-config",
        ])
        .unwrap();

        let err = run(&cli, &mut RecordingReporter::default()).unwrap_err();

        assert!(matches!(err, ConfsyncError::ProjectNotInitialized { .. }));
        assert!(err.help().is_some());
    }
}

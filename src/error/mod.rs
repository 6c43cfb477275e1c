//! Error types and handling for confsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`version`]: Version string errors
//! - [`manifest`]: `version.json` errors
//! - [`config`]: Range table and configuration errors
//! - [`workspace`]: Project and reference bundle location errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod manifest;
pub mod version;
pub mod workspace;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for confsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConfsyncError {
    // Version errors
    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(
        code(confsync::version::parse_failed),
        help("Versions must be dotted numbers such as 1.2.3 (optionally with -pre or +build)")
    )]
    VersionParseFailed { input: String, reason: String },

    // Manifest errors
    #[error("Reference configuration manifest not found: {path}")]
    #[diagnostic(
        code(confsync::manifest::missing),
        help("The shipped configuration bundle is incomplete. Reinstall confsync or fix --reference")
    )]
    ManifestMissing { path: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(confsync::manifest::parse_failed),
        help("version.json must be a JSON object with a \"config_version\" string")
    )]
    ManifestParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(confsync::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(confsync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Workspace errors
    #[error("No configuration bundle found from: {path}")]
    #[diagnostic(
        code(confsync::workspace::not_initialized),
        help("Run 'confsync init' to create the configs directory")
    )]
    ProjectNotInitialized { path: String },

    #[error("Configuration bundle already exists: {path}")]
    #[diagnostic(
        code(confsync::workspace::already_initialized),
        help("Use 'confsync check-config' to add files from a newer release")
    )]
    BundleAlreadyExists { path: String },

    #[error("Reference configuration bundle not found (searched: {searched})")]
    #[diagnostic(
        code(confsync::workspace::reference_not_found),
        help("Pass --reference <DIR> or set CONFSYNC_REFERENCE_DIR")
    )]
    ReferenceBundleNotFound { searched: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(confsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(confsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {path}: {reason}")]
    #[diagnostic(code(confsync::fs::copy_failed))]
    FileCopyFailed { path: String, reason: String },

    #[error("{count} configuration file(s) could not be copied")]
    #[diagnostic(
        code(confsync::fs::incomplete_reconcile),
        help("Fix the reported problems and run 'confsync check-config' again")
    )]
    ReconcileIncomplete { count: usize },

    #[error("IO error: {message}")]
    #[diagnostic(code(confsync::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ConfsyncError {
    fn from(err: std::io::Error) -> Self {
        ConfsyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfsyncError {
    fn from(err: serde_json::Error) -> Self {
        ConfsyncError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfsyncError>;

//! Manifest (`version.json`) errors

use super::ConfsyncError;

/// Creates a missing reference manifest error
pub fn missing(path: impl Into<String>) -> ConfsyncError {
    ConfsyncError::ManifestMissing { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

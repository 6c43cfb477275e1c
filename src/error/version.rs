//! Version string errors

use super::ConfsyncError;

/// Creates a version parse failed error
pub fn parse_failed(input: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::VersionParseFailed {
        input: input.into(),
        reason: reason.into(),
    }
}

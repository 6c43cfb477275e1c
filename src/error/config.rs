//! Configuration errors

use super::ConfsyncError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ConfsyncError {
    ConfsyncError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

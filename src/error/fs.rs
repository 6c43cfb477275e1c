//! File system errors

use super::ConfsyncError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a per-file copy failure
pub fn copy_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfsyncError {
    ConfsyncError::FileCopyFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates the error for a reconcile pass that left files uncopied
pub fn reconcile_incomplete(count: usize) -> ConfsyncError {
    ConfsyncError::ReconcileIncomplete { count }
}

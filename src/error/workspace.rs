//! Project and reference bundle location errors

use std::path::Path;

use super::ConfsyncError;

/// Creates a project not initialized error
pub fn not_initialized(path: impl Into<String>) -> ConfsyncError {
    ConfsyncError::ProjectNotInitialized { path: path.into() }
}

/// Creates a bundle already exists error
pub fn already_initialized(path: impl Into<String>) -> ConfsyncError {
    ConfsyncError::BundleAlreadyExists { path: path.into() }
}

/// Creates a reference bundle not found error listing every searched location
pub fn reference_not_found<I, P>(searched: I) -> ConfsyncError
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let searched = searched
        .into_iter()
        .map(|p| p.as_ref().display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    ConfsyncError::ReferenceBundleNotFound { searched }
}

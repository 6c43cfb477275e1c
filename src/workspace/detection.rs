//! Project detection utilities

use std::path::{Path, PathBuf};

use super::CONFIGS_DIR;

/// Check whether `root` has a user bundle directory
pub fn exists(root: &Path) -> bool {
    root.join(CONFIGS_DIR).is_dir()
}

/// Walk up from `start` to the first directory containing `configs/`
///
/// Returns `None` when no ancestor qualifies.
pub fn find_from(start: &Path) -> Option<PathBuf> {
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    start.ancestors().find(|dir| exists(dir)).map(Path::to_path_buf)
}

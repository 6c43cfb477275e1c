//! Location of the reference bundle shipped with confsync

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::workspace::CONFIGS_DIR;

/// Resolve the reference bundle directory
///
/// An explicit location (from `--reference` or `CONFSYNC_REFERENCE_DIR`) is used
/// as is. Otherwise the install-relative and per-user data locations are
/// tried in [`default_locations`] order.
pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => default_locations(),
    };

    match candidates.iter().find(|dir| dir.is_dir()) {
        Some(found) => {
            tracing::debug!(reference = %found.display(), "using reference bundle");
            Ok(found.clone())
        }
        None => Err(crate::error::workspace::reference_not_found(&candidates)),
    }
}

/// Default reference bundle locations, most specific first
///
/// - `<exe_dir>/../share/confsync/configs` (packaged install)
/// - `<exe_dir>/configs` (unpacked archive)
/// - `<data_dir>/confsync/configs` (per-user install)
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if let Some(prefix) = exe_dir.parent() {
            locations.push(prefix.join("share").join("confsync").join(CONFIGS_DIR));
        }
        locations.push(exe_dir.join(CONFIGS_DIR));
    }

    if let Some(data_dir) = dirs::data_dir() {
        locations.push(data_dir.join("confsync").join(CONFIGS_DIR));
    }

    locations
}

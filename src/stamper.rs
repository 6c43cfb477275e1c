//! Persisting manifests into user bundles
//!
//! Manifests are replaced atomically: the new content is written to a
//! temporary file in the bundle directory and renamed over `version.json`,
//! so readers see either the old or the new manifest, never a truncated one.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::config::manifest::manifest_path;
use crate::config::{MANIFEST_FILE, VersionManifest, VersionRangeRegistry};
use crate::error::Result;
use crate::version::SemanticVersion;

/// Atomically write `manifest` to the bundle at `bundle_root`
pub fn write_manifest(bundle_root: &Path, manifest: &VersionManifest) -> Result<()> {
    let path = manifest_path(bundle_root);
    let content = manifest.to_json()?;
    let write_failed = |e: &dyn std::fmt::Display| {
        crate::error::fs::write_failed(path.display().to_string(), e.to_string())
    };

    let mut tmp = NamedTempFile::new_in(bundle_root).map_err(|e| write_failed(&e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| write_failed(&e))?;
    // Temp files are created owner-only; the manifest keeps its previous mode
    if let Some(permissions) = manifest_permissions(&path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| write_failed(&e))?;
    }
    tmp.persist(&path).map_err(|e| write_failed(&e.error))?;

    tracing::debug!(path = %path.display(), "wrote manifest");
    Ok(())
}

/// Permissions for a rewritten manifest: those of the existing one, else the default
fn manifest_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_manifest_permissions(),
    }
}

#[cfg(unix)]
fn default_manifest_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_manifest_permissions() -> Option<fs::Permissions> {
    None
}

/// Create a user bundle from the reference bundle and stamp it with `current_version`
///
/// Only valid when `user_root` does not exist yet. The reference manifest is
/// read before anything is copied, so a broken installation leaves no
/// partial bundle behind. The stamp records the range matching
/// `current_version` when there is one.
pub fn initialize_from_scratch(
    reference_root: &Path,
    user_root: &Path,
    current_version: &SemanticVersion,
) -> Result<VersionManifest> {
    if user_root.exists() {
        return Err(crate::error::workspace::already_initialized(
            user_root.display().to_string(),
        ));
    }

    let registry = VersionRangeRegistry::load(reference_root)?;
    let manifest = VersionManifest::stamped(current_version, registry.resolve(current_version));

    copy_dir_recursive(
        reference_root,
        user_root,
        &CopyOptions::excluding(MANIFEST_FILE),
    )
    .map_err(|e| crate::error::fs::write_failed(user_root.display().to_string(), e.to_string()))?;

    write_manifest(user_root, &manifest)?;
    tracing::debug!(
        reference = %reference_root.display(),
        user = %user_root.display(),
        "initialized configuration bundle"
    );
    Ok(manifest)
}

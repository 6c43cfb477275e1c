//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Options for [`copy_dir_recursive`]
#[derive(Debug, Default, Clone)]
pub struct CopyOptions {
    /// Paths, relative to the source root, that are not copied
    pub exclude: Vec<PathBuf>,
}

impl CopyOptions {
    pub fn excluding(path: impl Into<PathBuf>) -> Self {
        Self {
            exclude: vec![path.into()],
        }
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|excluded| excluded == relative)
    }
}

/// Copy a directory tree, creating `dst` and every intermediate directory
///
/// Symlinks to files are copied as regular files holding the target's
/// content. Links to directories and special files are skipped.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2, options: &CopyOptions) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    fs::create_dir_all(dst_ref)?;

    for entry in WalkDir::new(src_ref).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src_ref)
            .map_err(std::io::Error::other)?;

        if options.is_excluded(relative) {
            continue;
        }

        let dst_path = dst_ref.join(relative);
        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else if is_file_entry(&entry) {
            fs::copy(entry.path(), &dst_path)?;
        }
    }

    Ok(())
}

/// True for a regular file or a symlink whose target is a regular file
pub fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Render a bundle-relative path with `/` separators on every platform
pub fn display_relative(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

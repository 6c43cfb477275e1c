//! Additive reconciliation of a user bundle against the reference bundle
//!
//! Reconciliation runs in two phases:
//! 1. [`FileReconciler::find_missing_files`] computes which reference files
//!    have no counterpart in the user bundle. It never touches the disk
//!    beyond reading directory listings.
//! 2. [`FileReconciler::copy_missing_files`] copies exactly those files.
//!    Existing destination files are never overwritten and a failure on one
//!    file does not stop the others.
//!
//! Both phases are idempotent: re-running them after an interrupted run only
//! copies what is still missing.

use std::fs::{self, File, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::fs::{display_relative, is_file_entry};
use crate::config::MANIFEST_FILE;
use crate::error::{ConfsyncError, Result};
use crate::ui::Reporter;

/// Why a file was not copied even though it was listed as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The destination appeared after the missing set was computed
    AlreadyExists,
}

/// Result of copying one file
#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    Skipped(SkipReason),
    Failed(ConfsyncError),
}

/// Outcome for one relative path
#[derive(Debug)]
pub struct CopyResult {
    pub path: PathBuf,
    pub outcome: CopyOutcome,
}

/// Per-file results of one copy pass, in input order
#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub results: Vec<CopyResult>,
}

impl ReconcileReport {
    /// Relative paths that were copied
    pub fn copied(&self) -> impl Iterator<Item = &Path> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, CopyOutcome::Copied))
            .map(|r| r.path.as_path())
    }

    /// Relative paths skipped because the destination already existed
    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, CopyOutcome::Skipped(_)))
            .map(|r| r.path.as_path())
    }

    /// Failed copies with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ConfsyncError)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            CopyOutcome::Failed(err) => Some((r.path.as_path(), err)),
            _ => None,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Reconciles a user bundle against a read-only reference bundle
#[derive(Debug, Clone, Copy)]
pub struct FileReconciler<'a> {
    reference_root: &'a Path,
    user_root: &'a Path,
}

impl<'a> FileReconciler<'a> {
    pub fn new(reference_root: &'a Path, user_root: &'a Path) -> Self {
        Self {
            reference_root,
            user_root,
        }
    }

    /// Relative paths of reference files absent from the user bundle
    ///
    /// Regular files and symlinks to regular files are listed, the root
    /// manifest is excluded, and the result is sorted. File contents are never compared. A missing user
    /// bundle means every reference file is missing.
    pub fn find_missing_files(&self) -> Result<Vec<PathBuf>> {
        let mut missing = Vec::new();

        for entry in WalkDir::new(self.reference_root).min_depth(1) {
            let entry = entry.map_err(|e| {
                crate::error::fs::read_failed(
                    e.path().unwrap_or(self.reference_root).display().to_string(),
                    e.to_string(),
                )
            })?;

            if !is_file_entry(&entry) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(self.reference_root) else {
                continue;
            };
            if relative == Path::new(MANIFEST_FILE) {
                continue;
            }

            // symlink_metadata so that a dangling link in the user bundle still counts as present
            if fs::symlink_metadata(self.user_root.join(relative)).is_err() {
                missing.push(relative.to_path_buf());
            }
        }

        missing.sort();
        tracing::debug!(
            reference = %self.reference_root.display(),
            user = %self.user_root.display(),
            missing = missing.len(),
            "computed missing configuration files"
        );
        Ok(missing)
    }

    /// Copy each relative path from the reference bundle into the user bundle
    ///
    /// Never overwrites. Every path gets exactly one result; failures are
    /// reported through `reporter` and collected, never propagated.
    pub fn copy_missing_files(
        &self,
        relative_paths: &[PathBuf],
        reporter: &mut dyn Reporter,
    ) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for relative in relative_paths {
            let outcome = self.copy_one(relative);
            let shown = display_relative(relative);
            match &outcome {
                CopyOutcome::Copied => tracing::debug!(path = %shown, "copied"),
                CopyOutcome::Skipped(SkipReason::AlreadyExists) => {
                    reporter.warn(&format!("{shown} already exists, left unchanged"));
                }
                CopyOutcome::Failed(err) => reporter.error(&err.to_string()),
            }
            report.results.push(CopyResult {
                path: relative.clone(),
                outcome,
            });
        }

        report
    }

    fn copy_one(&self, relative: &Path) -> CopyOutcome {
        let source = self.reference_root.join(relative);
        let target = self.user_root.join(relative);
        let failed = |e: io::Error| {
            CopyOutcome::Failed(crate::error::fs::copy_failed(
                display_relative(relative),
                e.to_string(),
            ))
        };

        let mut src_file = match File::open(&source) {
            Ok(file) => file,
            Err(e) => return failed(e),
        };
        let metadata = match src_file.metadata() {
            Ok(metadata) => metadata,
            Err(e) => return failed(e),
        };

        if let Some(parent) = target.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                return failed(e);
            }
        }

        // create_new is the overwrite guard: it fails if anything is already at `target`
        let mut dst_file = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return CopyOutcome::Skipped(SkipReason::AlreadyExists);
            }
            Err(e) => return failed(e),
        };

        if let Err(e) = io::copy(&mut src_file, &mut dst_file) {
            drop(dst_file);
            return CopyOutcome::Failed(discard_partial(relative, &target, &e));
        }

        if let Err(e) = preserve_metadata(&dst_file, &metadata) {
            tracing::warn!(
                path = %target.display(),
                error = %e,
                "could not preserve permissions or modification time"
            );
        }

        CopyOutcome::Copied
    }
}

/// Remove a partially written `target` after the copy failed with `err`
///
/// A leftover that cannot be removed would count as present on the next run,
/// so it is named in the returned error.
fn discard_partial(relative: &Path, target: &Path, err: &io::Error) -> ConfsyncError {
    let shown = display_relative(relative);
    match fs::remove_file(target) {
        Ok(()) => crate::error::fs::copy_failed(shown, err.to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            crate::error::fs::copy_failed(shown, err.to_string())
        }
        Err(cleanup) => {
            tracing::warn!(
                path = %target.display(),
                error = %cleanup,
                "could not remove partially copied file"
            );
            crate::error::fs::copy_failed(
                shown,
                format!(
                    "{err}; partial file left at {}, remove it and run again: {cleanup}",
                    target.display()
                ),
            )
        }
    }
}

fn preserve_metadata(target: &File, source: &Metadata) -> io::Result<()> {
    if let Ok(modified) = source.modified() {
        target.set_modified(modified)?;
    }
    target.set_permissions(source.permissions())
}

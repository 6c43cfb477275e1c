//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_file, RecordingReporter};
//!
//! let temp = create_temp_dir();
//! write_file(temp.path(), "reference/a.json", "{}");
//! let mut reporter = RecordingReporter::default();
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::ui::Reporter;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `root/relative`, creating parent directories.
///
/// # Panics
///
/// Panics on any I/O failure.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Read `root/relative` as a string.
///
/// # Panics
///
/// Panics if the file cannot be read.
#[must_use]
pub fn read_file(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).expect("Failed to read file")
}

/// Create a bundle directory `root/name` containing the given `(path, content)` files.
pub fn create_bundle(root: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let bundle = root.join(name);
    std::fs::create_dir_all(&bundle).expect("Failed to create bundle directory");
    for (relative, content) in files {
        write_file(&bundle, relative, content);
    }
    bundle
}

/// Reporter that stores every message as `"LEVEL message"`.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Vec<String>,
}

impl RecordingReporter {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    fn push(&mut self, level: &str, message: &str) {
        self.lines.push(format!("{level} {message}"));
    }
}

impl Reporter for RecordingReporter {
    fn info(&mut self, message: &str) {
        self.push("INFO", message);
    }

    fn success(&mut self, message: &str) {
        self.push("SUCCESS", message);
    }

    fn warn(&mut self, message: &str) {
        self.push("WARN", message);
    }

    fn error(&mut self, message: &str) {
        self.push("ERROR", message);
    }
}

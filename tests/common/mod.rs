//! Common test utilities for confsync integration tests

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory next to a reference bundle, both in one temp dir
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Project root (parent of `configs/`)
    pub project: PathBuf,
    /// Reference bundle root
    pub reference: PathBuf,
}

impl TestWorkspace {
    /// Create an empty project and an empty reference bundle
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let project = temp.path().join("project");
        let reference = temp.path().join("reference");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        std::fs::create_dir_all(&reference).expect("Failed to create reference directory");
        Self {
            temp,
            project,
            reference,
        }
    }

    /// User bundle root
    pub fn configs(&self) -> PathBuf {
        self.project.join("configs")
    }

    /// Write a file into the reference bundle
    pub fn write_reference(&self, path: &str, content: &str) {
        write(&self.reference, path, content);
    }

    /// Write a file into the user bundle
    pub fn write_config(&self, path: &str, content: &str) {
        write(&self.configs(), path, content);
    }

    /// Read a file from the user bundle
    pub fn read_config(&self, path: &str) -> String {
        std::fs::read_to_string(self.configs().join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the user bundle
    pub fn config_exists(&self, path: &str) -> bool {
        self.configs().join(path).exists()
    }

    /// confsync command run from the project, reporting `software_version`
    pub fn confsync(&self, software_version: &str) -> Command {
        let mut cmd = confsync_cmd();
        cmd.current_dir(&self.project)
            .env("CONFSYNC_REFERENCE_DIR", &self.reference)
            .env("CONFSYNC_SOFTWARE_VERSION", software_version)
            .env_remove("CONFSYNC_WORKSPACE")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// confsync binary built for this test run
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn confsync_cmd() -> Command {
    Command::cargo_bin("confsync").expect("confsync binary not built")
}

fn write(root: &Path, path: &str, content: &str) {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&file_path, content).expect("Failed to write file");
}

//! Project and bundle locations
//!
//! This module handles:
//! - Finding the project whose `configs/` directory is the user bundle
//! - Locating the read-only reference bundle shipped with confsync
//!
//! ## Project Structure
//!
//! ```text
//! <project>/
//! └── configs/           # User bundle
//!     ├── version.json   # Stamped manifest
//!     └── ...            # Configuration files
//! ```

pub mod detection;
pub mod reference;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// User bundle directory name inside a project
pub const CONFIGS_DIR: &str = "configs";

/// A project directory and its user bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project root (the directory containing `configs/`)
    pub root: PathBuf,

    /// User bundle root
    pub configs_dir: PathBuf,
}

impl Project {
    /// Project rooted exactly at `root`, initialized or not
    pub fn at(root: &Path) -> Self {
        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let configs_dir = root.join(CONFIGS_DIR);
        Self { root, configs_dir }
    }

    /// Find the nearest initialized project at or above `start`
    pub fn discover(start: &Path) -> Result<Self> {
        detection::find_from(start)
            .map(|root| Self::at(&root))
            .ok_or_else(|| crate::error::workspace::not_initialized(start.display().to_string()))
    }

    pub fn is_initialized(&self) -> bool {
        self.configs_dir.is_dir()
    }
}

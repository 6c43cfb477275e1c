//! Command implementations for confsync CLI

pub mod check_config;
pub mod completions;
pub mod init;
pub mod version;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::version::SemanticVersion;
use crate::workspace::reference;

/// Settings shared by the commands that touch bundles
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory the project search starts from
    pub start_dir: PathBuf,

    /// Reference bundle given on the command line or in the environment
    pub reference: Option<PathBuf>,

    /// Version of the running software
    pub software_version: SemanticVersion,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let start_dir = match &cli.workspace {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let software_version = SemanticVersion::parse(
            cli.software_version
                .as_deref()
                .unwrap_or(env!("CARGO_PKG_VERSION")),
        )?;

        Ok(Self {
            start_dir,
            reference: cli.reference.clone(),
            software_version,
        })
    }

    /// Locate the reference bundle for this run
    pub fn reference_dir(&self) -> Result<PathBuf> {
        reference::resolve(self.reference.as_deref())
    }

    #[cfg(test)]
    pub fn for_test(
        start_dir: &std::path::Path,
        reference: &std::path::Path,
        software_version: &str,
    ) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            reference: Some(reference.to_path_buf()),
            software_version: SemanticVersion::parse(software_version).unwrap(),
        }
    }
}

//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: check-config command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;

pub use check::CheckConfigArgs;
pub use completions::CompletionsArgs;

/// confsync - configuration bundle version manager
///
/// Keeps a project's configuration bundle compatible with the installed release.
#[derive(Parser, Debug)]
#[command(
    name = "confsync",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Keep project configuration bundles compatible with the installed release",
    long_about = "confsync checks whether a project's configs/ directory matches the configuration \
                  version supported by this release, and adds files that are new in this release \
                  without touching files that already exist.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  confsync init                      \x1b[90m# Create configs/ in the current directory\x1b[0m\n   \
                  confsync check-config              \x1b[90m# Check and add new configuration files\x1b[0m\n   \
                  confsync check-config --dry-run    \x1b[90m# Only report what would change\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "CONFSYNC_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Reference configuration bundle shipped with this release
    #[arg(long, short = 'r', global = true, env = "CONFSYNC_REFERENCE_DIR")]
    pub reference: Option<PathBuf>,

    /// Software version to check against (defaults to this build's version)
    #[arg(long, global = true, hide = true, env = "CONFSYNC_SOFTWARE_VERSION")]
    pub software_version: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configs directory from the reference bundle
    Init,

    /// Check configuration compatibility and add new files
    #[command(name = "check-config")]
    CheckConfig(CheckConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

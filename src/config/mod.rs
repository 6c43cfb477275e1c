//! Configuration bundle metadata
//!
//! This module contains data structures for:
//! - `version.json` - The manifest stamped into every configuration bundle
//! - The named version ranges a shipped bundle declares support for

pub mod manifest;
pub mod ranges;

// Re-export commonly used types
pub use manifest::{MANIFEST_FILE, VersionManifest};
pub use ranges::VersionRangeRegistry;

//! Version command implementation

use crate::config::MANIFEST_FILE;
use crate::error::Result;
use crate::version::SemanticVersion;

/// Run version command
pub fn run() -> Result<()> {
    println!("confsync {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", min_rust_version());
    println!("  Profile: {}", build_profile());
    println!();
    println!("Configuration:");
    println!("  Manifest file: {MANIFEST_FILE}");
    println!(
        "  Unstamped bundles assume: {}",
        SemanticVersion::baseline()
    );

    Ok(())
}

fn min_rust_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_build_profile_matches_assertions() {
        assert_eq!(build_profile() == "debug", cfg!(debug_assertions));
    }
}

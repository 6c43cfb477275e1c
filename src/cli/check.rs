use clap::Parser;

/// Arguments for check-config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check and add configuration files new in this release:\n    confsync check-config\n\n\
                  Only report what would be added:\n    confsync check-config --dry-run")]
pub struct CheckConfigArgs {
    /// Report the compatibility status and missing files without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    generate(args.shell, &mut std::io::stdout().lock());
    Ok(())
}

fn generate(shell: clap_complete::Shell, out: &mut dyn std::io::Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "confsync", out);
}

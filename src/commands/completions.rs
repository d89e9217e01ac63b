//! The `completions` command: shell completion scripts.

use anyhow::Result;
use clap::CommandFactory as _;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout.
///
/// # Errors
///
/// Infallible today; returns `Result` for symmetry with the other commands.
pub fn run(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "makegen", &mut std::io::stdout());
    Ok(())
}

//! Binary entry point for the `makegen` command-line interface.

use anyhow::Result;
use clap::Parser;

use makegen_cli::cli::{Cli, Command, GenerateOpts};
use makegen_cli::{commands, logging};

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);
    let log = logging::Logger::new(args.verbose);

    // Zero-argument invocation generates with defaults.
    let command = args
        .command
        .unwrap_or_else(|| Command::Generate(GenerateOpts::default()));

    match command {
        Command::Generate(opts) => commands::generate::run(&opts, &log),
        Command::List => commands::list::run(),
        Command::Completions { shell } => commands::completions::run(shell),
        Command::Version => {
            let version = option_env!("MAKEGEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("makegen {version}");
            Ok(())
        }
    }
}

//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::profile::TargetLayout;
use crate::selector::TieBreak;

/// Top-level CLI entry point for the Makefile generator.
#[derive(Parser, Debug)]
#[command(
    name = "makegen",
    about = "Host-environment-aware Makefile generator",
    version
)]
pub struct Cli {
    /// Subcommand; omitted means `generate` with defaults.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect the environment and write the Makefile
    Generate(GenerateOpts),
    /// List registered profiles and their defaults
    List,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Print version information
    Version,
}

/// Options for the `generate` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateOpts {
    /// Select a profile by key instead of detecting the environment
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Override the compiler (CXX)
    #[arg(long)]
    pub cxx: Option<String>,

    /// Override the compiler flags (CXXFLAGS)
    #[arg(long, allow_hyphen_values = true)]
    pub cxxflags: Option<String>,

    /// Target stanza layout to render
    #[arg(long, value_enum)]
    pub targets: Option<TargetLayout>,

    /// Output path (default: Makefile in the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Winner rule when multiple profiles match
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Fail instead of falling back when no profile matches
    #[arg(long)]
    pub fail_on_no_match: bool,

    /// Fallback profile key for the no-match case
    #[arg(long)]
    pub fallback: Option<String>,

    /// Config file path (default: makegen.toml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render and log without writing the output file
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

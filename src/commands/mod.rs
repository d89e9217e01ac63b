//! Top-level subcommand orchestration.

pub mod completions;
pub mod generate;
pub mod list;

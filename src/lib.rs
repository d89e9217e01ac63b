//! Host-environment-aware Makefile generator.
//!
//! Detects which of several known build environments the process is running
//! in (NERSC hosts, macOS, Travis CI), picks the matching compiler/flags
//! profile, and writes a `Makefile` for the downstream `make` invocation.
//! One descriptor per run; nothing is compiled or resolved here.
//!
//! The public API is organised into small layers:
//!
//! - **[`environment`]** — immutable snapshot of env vars and the OS kernel
//! - **[`registry`]** — the ordered table of known profiles
//! - **[`selector`]** — predicate evaluation, tie-breaking, no-match policy
//! - **[`render`]** — pure profile → descriptor text
//! - **[`writer`]** — persist the descriptor
//! - **[`commands`]** — top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod profile;
pub mod registry;
pub mod render;
pub mod selector;
pub mod writer;

//! Logging collaborator backed by [`tracing`].
//!
//! Also home of the environment-dump diagnostic: historically that dump was a
//! side effect of constructing one profile variant; here it is an explicit
//! method the selector invokes, keeping profile construction pure.

use tracing_subscriber::EnvFilter;

use crate::environment::EnvironmentSnapshot;

/// Install the global tracing subscriber.
///
/// Respects `MAKEGEN_LOG` when set; otherwise `info` (or `debug` with
/// `verbose`). Output goes to stderr so the descriptor can be piped from
/// stdout in dry runs.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("MAKEGEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Structured logger handed to commands and the selector.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "makegen::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "makegen::dry_run", "{msg}");
    }

    /// Dump the captured environment, one variable per line.
    ///
    /// Strictly informational: must never suppress or convert an error on
    /// the selection path.
    pub fn dump_environment(&self, env: &EnvironmentSnapshot) {
        self.debug(&format!("kernel: {}", env.kernel()));
        for (key, value) in env.vars() {
            self.debug(&format!("{key}={value}"));
        }
    }
}

//! Domain-specific error types for profile selection.
//!
//! Internal modules return typed errors via [`thiserror`]; command handlers
//! at the CLI boundary convert them to [`anyhow::Error`] with the standard
//! `?` operator.

use thiserror::Error;

/// Errors that arise while resolving a profile from the registry.
#[derive(Error, Debug)]
pub enum SelectError {
    /// No registered predicate matched and the no-match policy requires
    /// failure. Nothing is written in this case.
    #[error("no registered profile matches the current environment")]
    UnrecognizedEnvironment,

    /// A requested profile key (explicit or fallback) is absent from the
    /// registry.
    #[error("unknown profile '{key}' (available: {available})")]
    UnregisteredProfileKey {
        /// The key that failed to resolve.
        key: String,
        /// Comma-separated list of registered keys.
        available: String,
    },
}

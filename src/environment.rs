//! Point-in-time capture of the process environment.
//!
//! Profile predicates never read `std::env` directly; they evaluate against
//! an [`EnvironmentSnapshot`] captured once per invocation, so selection is
//! deterministic and tests never touch real process state.

use std::collections::BTreeMap;

/// Immutable view of the environment variables and OS kernel identifier at
/// capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
    kernel: String,
}

impl EnvironmentSnapshot {
    /// Capture the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
            kernel: detect_kernel().to_string(),
        }
    }

    /// Create a snapshot with explicit values.
    #[must_use]
    pub fn new<K, V>(kernel: &str, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            kernel: kernel.to_string(),
        }
    }

    /// Look up a single environment variable.
    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Return `true` if any variable key starts with `prefix`.
    #[must_use]
    pub fn has_var_with_prefix(&self, prefix: &str) -> bool {
        self.vars.keys().any(|k| k.starts_with(prefix))
    }

    /// The OS kernel name (e.g. `"linux"`, `"darwin"`).
    #[must_use]
    pub fn kernel(&self) -> &str {
        &self.kernel
    }

    /// Iterate over all captured variables in key order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Map the compile-time target OS to the kernel name used by profile
/// predicates. `uname -s` spellings, lower-cased.
fn detect_kernel() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

//! Optional `makegen.toml` configuration loading.
//!
//! Every field mirrors a CLI flag; precedence is CLI > file > built-in
//! default and the merge lives in the generate command. A missing file is
//! not an error, a malformed one is.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::profile::TargetLayout;
use crate::selector::TieBreak;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "makegen.toml";

/// Values loadable from `makegen.toml`. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    /// Explicit profile key, bypassing detection.
    pub profile: Option<String>,
    /// Compiler override.
    pub cxx: Option<String>,
    /// Compiler flags override.
    pub cxxflags: Option<String>,
    /// Target stanza layout.
    pub targets: Option<TargetLayout>,
    /// Tie-break rule for simultaneous matches.
    pub tie_break: Option<TieBreak>,
    /// Fail instead of falling back when nothing matches.
    pub fail_on_no_match: Option<bool>,
    /// Fallback profile key for the no-match case.
    pub fallback: Option<String>,
    /// Output path for the descriptor.
    pub output: Option<PathBuf>,
}

/// Load configuration from `path`.
///
/// A missing file yields [`FileConfig::default()`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

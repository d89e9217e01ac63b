//! Descriptor persistence.
//!
//! Single writer, full overwrite: the descriptor is rendered completely in
//! memory before this module is reached, so a partial artifact can only come
//! from the OS failing mid-write, which propagates to the caller.

use anyhow::{Context as _, Result};
use std::path::Path;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "Makefile";

/// Write `text` to `path`, truncating any existing file, in one operation.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_descriptor(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

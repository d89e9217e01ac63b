//! The `list` command: print the registered profile table.

use anyhow::Result;

use crate::registry::Registry;

/// Print each registered profile with its defaults, in scan order.
///
/// # Errors
///
/// Infallible today; returns `Result` for symmetry with the other commands.
pub fn run() -> Result<()> {
    let registry = Registry::builtin();
    for spec in registry.iter() {
        let cxx = spec.default_cxx().unwrap_or("-");
        println!(
            "{:<8} CXX={:<6} CXXFLAGS={}",
            spec.key(),
            cxx,
            spec.default_cxxflags()
        );
    }
    Ok(())
}

//! Descriptor rendering: pure profile → text.
//!
//! The output is parsed by the downstream `make`, so the syntax here is a
//! compatibility contract: `KEY = VALUE` with the key left-justified to a
//! fixed column, stanzas as `<name> :` with tab-indented command lines,
//! blank-line separated.

use std::fmt::Write as _;

use crate::profile::{Profile, Target};

/// Column width keys are left-justified to before ` = `.
pub const KEY_WIDTH: usize = 10;

/// Descriptor renderer.
///
/// Rendering is deterministic and side-effect free: the same profile always
/// produces byte-identical text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    /// Suppress the `CXX` line even when the profile carries a compiler.
    pub omit_cxx: bool,
}

impl Renderer {
    /// Render `profile` as descriptor text.
    #[must_use]
    pub fn render(&self, profile: &Profile) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", profile.name);

        if !self.omit_cxx
            && let Some(cxx) = profile.cxx.as_deref()
            && !cxx.is_empty()
        {
            out.push_str(&kv_line("CXX", cxx));
        }
        out.push_str(&kv_line("CXXFLAGS", &profile.cxxflags));
        out.push('\n');

        let stanzas: Vec<String> = profile.targets.targets().iter().map(stanza).collect();
        out.push_str(&stanzas.join("\n"));
        out
    }
}

/// One `KEY = VALUE` line with the key left-justified to [`KEY_WIDTH`].
fn kv_line(key: &str, value: &str) -> String {
    format!("{key:<KEY_WIDTH$} = {value}\n")
}

/// One target stanza: `<name> :` followed by tab-prefixed command lines.
fn stanza(target: &Target) -> String {
    let mut s = format!("{} :\n", target.name);
    for command in &target.commands {
        let _ = writeln!(s, "\t{command}");
    }
    s
}

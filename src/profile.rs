//! Profile data model: compiler settings, override precedence, and target
//! stanzas.
//!
//! A profile is a plain data record. Defaults live in the registry entry that
//! constructs it; caller overrides win field-by-field via [`resolve`]. There
//! is no inheritance anywhere in this model.

use clap::ValueEnum;
use serde::Deserialize;

/// Override-precedence merge: the explicit value if present, else the
/// default. Applied independently to each profile field.
#[must_use]
pub fn resolve<T>(explicit: Option<T>, default: Option<T>) -> Option<T> {
    explicit.or(default)
}

/// A single target stanza: a literal name and its command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Target name as it appears before the `:` in the descriptor.
    pub name: String,
    /// Command lines, each rendered with a single leading tab.
    pub commands: Vec<String>,
}

impl Target {
    /// Create a target from literal name and command strings.
    #[must_use]
    pub fn new(name: &str, commands: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            commands: commands.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Ordered set of target stanzas attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    /// Configuration-only descriptor: no target stanzas at all.
    #[must_use]
    pub const fn config_only() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Application build: `all`, `test` (nested build in `testing/`), and
    /// `distclean` (cleanup in both subdirectories).
    #[must_use]
    pub fn application() -> Self {
        Self {
            targets: vec![
                Target::new("all", &[]),
                Target::new("test", &["cd testing && make test"]),
                Target::new(
                    "distclean",
                    &["cd app/decam && make realclean", "cd testing && make deepclean"],
                ),
            ],
        }
    }

    /// Test-subdirectory build: `none`, `test` (touch sources, nested build,
    /// run the test executable), and `distclean` (same as application).
    #[must_use]
    pub fn testing() -> Self {
        Self {
            targets: vec![
                Target::new("none", &[]),
                Target::new("test", &["touch test-c3.cc", "cd .. && make", "./test-c3"]),
                Target::new(
                    "distclean",
                    &["cd app/decam && make realclean", "cd testing && make deepclean"],
                ),
            ],
        }
    }

    /// The stanzas in declared order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Return `true` if the set carries no stanzas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Named stanza layout, selectable from the CLI and `makegen.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetLayout {
    /// No target stanzas.
    Config,
    /// `all` / `test` / `distclean`.
    Application,
    /// `none` / `test` / `distclean`.
    Testing,
}

impl TargetLayout {
    /// Materialise the layout as a [`TargetSet`].
    #[must_use]
    pub fn target_set(self) -> TargetSet {
        match self {
            Self::Config => TargetSet::config_only(),
            Self::Application => TargetSet::application(),
            Self::Testing => TargetSet::testing(),
        }
    }
}

/// Caller-supplied values taking precedence over a profile's built-in
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Compiler override (`CXX`).
    pub cxx: Option<String>,
    /// Compiler flags override (`CXXFLAGS`).
    pub cxxflags: Option<String>,
    /// Target stanza set override.
    pub targets: Option<TargetSet>,
}

/// A constructed profile instance: the input to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Profile key, also the descriptor header name.
    pub name: String,
    /// Compiler, when the profile defines or the caller supplies one.
    pub cxx: Option<String>,
    /// Compiler flags.
    pub cxxflags: String,
    /// Target stanzas to render.
    pub targets: TargetSet,
}

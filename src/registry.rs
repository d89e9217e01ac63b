//! Ordered table of known environment profiles.
//!
//! Built once at startup and immutable thereafter. Each entry pairs a pure
//! predicate over the [`EnvironmentSnapshot`] with the profile's built-in
//! defaults; construction merges caller overrides via
//! [`resolve`](crate::profile::resolve).

use crate::environment::EnvironmentSnapshot;
use crate::profile::{Overrides, Profile, TargetSet, resolve};

/// Pure detection predicate evaluated against a snapshot.
pub type Predicate = fn(&EnvironmentSnapshot) -> bool;

/// A registered profile: key, detection predicate, and built-in defaults.
#[derive(Debug, Clone)]
pub struct ProfileSpec {
    key: &'static str,
    matches: Predicate,
    default_cxx: Option<&'static str>,
    default_cxxflags: &'static str,
    /// Marks the profile whose selection triggers the environment dump
    /// diagnostic. The dump itself is the selector's job; constructing the
    /// profile stays pure.
    dump_environment: bool,
}

impl ProfileSpec {
    /// The profile key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Evaluate the detection predicate against `env`.
    #[must_use]
    pub fn matches(&self, env: &EnvironmentSnapshot) -> bool {
        (self.matches)(env)
    }

    /// Default compiler, if the profile defines one.
    #[must_use]
    pub const fn default_cxx(&self) -> Option<&'static str> {
        self.default_cxx
    }

    /// Default compiler flags.
    #[must_use]
    pub const fn default_cxxflags(&self) -> &'static str {
        self.default_cxxflags
    }

    /// Whether selecting this profile triggers the environment dump.
    #[must_use]
    pub const fn dumps_environment(&self) -> bool {
        self.dump_environment
    }

    /// Construct the profile instance, merging `overrides` over the built-in
    /// defaults field-by-field.
    #[must_use]
    pub fn construct(&self, overrides: &Overrides) -> Profile {
        Profile {
            name: self.key.to_string(),
            cxx: resolve(
                overrides.cxx.clone(),
                self.default_cxx.map(ToString::to_string),
            ),
            cxxflags: resolve(
                overrides.cxxflags.clone(),
                Some(self.default_cxxflags.to_string()),
            )
            .unwrap_or_default(),
            targets: overrides
                .targets
                .clone()
                .unwrap_or_else(TargetSet::application),
        }
    }
}

/// Ordered, immutable collection of profile specs.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ProfileSpec>,
}

fn matches_edison(env: &EnvironmentSnapshot) -> bool {
    env.var("NERSC_HOST") == Some("edison")
}

fn matches_cori(env: &EnvironmentSnapshot) -> bool {
    env.var("NERSC_HOST") == Some("cori")
}

/// Shared by `clang` and `other`: the historical table defines both against
/// the same kernel test, and the tie-break policy decides which wins.
fn matches_darwin(env: &EnvironmentSnapshot) -> bool {
    env.kernel().eq_ignore_ascii_case("darwin")
}

fn matches_travis(env: &EnvironmentSnapshot) -> bool {
    env.has_var_with_prefix("TRAVIS_")
}

impl Registry {
    /// The built-in profile table, in declared scan order.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ProfileSpec {
                    key: "edison",
                    matches: matches_edison,
                    default_cxx: Some("CC"),
                    default_cxxflags: "-std=c++11 -fast -no-ipo",
                    dump_environment: false,
                },
                ProfileSpec {
                    key: "cori",
                    matches: matches_cori,
                    default_cxx: Some("CC"),
                    default_cxxflags: "-std=c++11 -fast -no-ipo",
                    dump_environment: false,
                },
                ProfileSpec {
                    key: "clang",
                    matches: matches_darwin,
                    default_cxx: Some("c++"),
                    default_cxxflags: "-std=c++11 -O3",
                    dump_environment: false,
                },
                ProfileSpec {
                    key: "other",
                    matches: matches_darwin,
                    default_cxx: Some("clang"),
                    default_cxxflags: "-std=c++11 -O3",
                    dump_environment: true,
                },
                ProfileSpec {
                    key: "travis",
                    matches: matches_travis,
                    default_cxx: None,
                    default_cxxflags: "-std=c++11 -O3",
                    dump_environment: false,
                },
            ],
        }
    }

    /// Look up a spec by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProfileSpec> {
        self.entries.iter().find(|s| s.key == key)
    }

    /// Iterate over specs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &ProfileSpec> {
        self.entries.iter()
    }

    /// Registered keys in declared order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|s| s.key).collect()
    }
}

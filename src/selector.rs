//! Profile selection: predicate scan, tie-breaking, override merge, and the
//! no-match policy.
//!
//! The scan is an explicit ordered walk of the registry under one declared
//! tie-break policy, never an accident of map iteration order.

use clap::ValueEnum;
use serde::Deserialize;

use crate::environment::EnvironmentSnapshot;
use crate::error::SelectError;
use crate::logging::Logger;
use crate::profile::{Overrides, Profile};
use crate::registry::{ProfileSpec, Registry};

/// Winner rule when multiple predicates match in one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Stop the scan at the first matching entry.
    FirstMatch,
    /// Keep overwriting the winner; the last matching entry wins.
    LastMatch,
}

/// Behavior when no predicate matches and no explicit key was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Fail with [`SelectError::UnrecognizedEnvironment`]; nothing is
    /// written.
    Fail,
    /// Fall back to the named profile key.
    Fallback(String),
}

/// Selection configuration: tie-break rule plus no-match policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Winner rule for simultaneous matches.
    pub tie_break: TieBreak,
    /// What to do when nothing matches.
    pub no_match: NoMatchPolicy,
}

impl Default for SelectorConfig {
    /// Reference behavior: last match wins, silent fallback to `other`.
    fn default() -> Self {
        Self {
            tie_break: TieBreak::LastMatch,
            no_match: NoMatchPolicy::Fallback("other".to_string()),
        }
    }
}

fn lookup<'r>(registry: &'r Registry, key: &str) -> Result<&'r ProfileSpec, SelectError> {
    registry
        .get(key)
        .ok_or_else(|| SelectError::UnregisteredProfileKey {
            key: key.to_string(),
            available: registry.keys().join(", "),
        })
}

/// Scan the registry in declared order and return the winning spec, if any.
fn scan<'r>(
    registry: &'r Registry,
    tie_break: TieBreak,
    env: &EnvironmentSnapshot,
) -> Option<&'r ProfileSpec> {
    let mut winner = None;
    for spec in registry.iter() {
        if spec.matches(env) {
            winner = Some(spec);
            if tie_break == TieBreak::FirstMatch {
                break;
            }
        }
    }
    winner
}

/// Resolve one profile instance.
///
/// With `explicit` set, the key is looked up directly and predicates are not
/// consulted. Otherwise the registry is scanned under the configured
/// tie-break, falling back per the no-match policy. The winning spec is
/// constructed with `overrides` merged over its defaults; specs marked for
/// the environment dump have the diagnostic emitted through `log` first.
///
/// # Errors
///
/// Returns [`SelectError::UnregisteredProfileKey`] when the explicit or
/// fallback key is not registered, and
/// [`SelectError::UnrecognizedEnvironment`] when nothing matches under
/// [`NoMatchPolicy::Fail`].
pub fn select(
    registry: &Registry,
    config: &SelectorConfig,
    env: &EnvironmentSnapshot,
    explicit: Option<&str>,
    overrides: &Overrides,
    log: &Logger,
) -> Result<Profile, SelectError> {
    let spec = match explicit {
        Some(key) => lookup(registry, key)?,
        None => match scan(registry, config.tie_break, env) {
            Some(spec) => spec,
            None => match &config.no_match {
                NoMatchPolicy::Fail => return Err(SelectError::UnrecognizedEnvironment),
                NoMatchPolicy::Fallback(key) => {
                    log.debug(&format!("no profile matched, falling back to '{key}'"));
                    lookup(registry, key)?
                }
            },
        },
    };

    if spec.dumps_environment() {
        log.dump_environment(env);
    }
    Ok(spec.construct(overrides))
}

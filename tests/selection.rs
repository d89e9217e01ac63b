#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Selection-policy property tests: override precedence across the whole
//! registry, tie-break determinism, and the two no-match branches.

mod common;

use common::snapshot;
use makegen_cli::error::SelectError;
use makegen_cli::logging::Logger;
use makegen_cli::profile::Overrides;
use makegen_cli::registry::Registry;
use makegen_cli::render::Renderer;
use makegen_cli::selector::{self, NoMatchPolicy, SelectorConfig, TieBreak};

fn select_explicit(key: &str, overrides: &Overrides) -> Result<String, SelectError> {
    let profile = selector::select(
        &Registry::builtin(),
        &SelectorConfig::default(),
        &snapshot("linux", &[]),
        Some(key),
        overrides,
        &Logger::new(false),
    )?;
    Ok(Renderer::default().render(&profile))
}

// ---------------------------------------------------------------------------
// Override precedence law, across every registered key
// ---------------------------------------------------------------------------

/// Explicit selection with no overrides renders each variant's built-in
/// defaults exactly.
#[test]
fn defaults_render_for_every_registered_key() {
    let registry = Registry::builtin();
    for spec in registry.iter() {
        let out = select_explicit(spec.key(), &Overrides::default()).unwrap();
        assert!(out.starts_with(&format!("# {}\n", spec.key())));
        match spec.default_cxx() {
            Some(cxx) => assert!(
                out.contains(&format!("CXX        = {cxx}\n")),
                "profile '{}' should render its default compiler",
                spec.key()
            ),
            None => assert!(
                !out.contains("CXX "),
                "profile '{}' has no compiler and must not render a CXX line",
                spec.key()
            ),
        }
        assert!(out.contains(&format!("CXXFLAGS   = {}\n", spec.default_cxxflags())));
    }
}

/// With overrides, the override values appear verbatim for every key.
#[test]
fn overrides_render_verbatim_for_every_registered_key() {
    let registry = Registry::builtin();
    let overrides = Overrides {
        cxx: Some("CC-override".to_string()),
        cxxflags: Some("-flags-override".to_string()),
        targets: None,
    };
    for spec in registry.iter() {
        let out = select_explicit(spec.key(), &overrides).unwrap();
        assert!(out.contains("CXX        = CC-override\n"));
        assert!(out.contains("CXXFLAGS   = -flags-override\n"));
    }
}

// ---------------------------------------------------------------------------
// Tie-break determinism on the duplicated darwin predicate
// ---------------------------------------------------------------------------

#[test]
fn darwin_winner_is_deterministic_under_each_policy() {
    let env = snapshot("Darwin", &[]);
    let registry = Registry::builtin();
    let log = Logger::new(false);

    for (tie_break, expected) in [
        (TieBreak::LastMatch, "other"),
        (TieBreak::FirstMatch, "clang"),
    ] {
        let config = SelectorConfig {
            tie_break,
            no_match: NoMatchPolicy::Fail,
        };
        for _ in 0..5 {
            let profile = selector::select(
                &registry,
                &config,
                &env,
                None,
                &Overrides::default(),
                &log,
            )
            .unwrap();
            assert_eq!(profile.name, expected, "tie-break {tie_break:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// No-match policy branches
// ---------------------------------------------------------------------------

#[test]
fn unmatched_environment_fails_under_fail_policy() {
    let config = SelectorConfig {
        tie_break: TieBreak::LastMatch,
        no_match: NoMatchPolicy::Fail,
    };
    let err = selector::select(
        &Registry::builtin(),
        &config,
        &snapshot("linux", &[("PATH", "/usr/bin")]),
        None,
        &Overrides::default(),
        &Logger::new(false),
    )
    .unwrap_err();
    assert!(matches!(err, SelectError::UnrecognizedEnvironment));
}

#[test]
fn unmatched_environment_falls_back_under_fallback_policy() {
    let config = SelectorConfig {
        tie_break: TieBreak::LastMatch,
        no_match: NoMatchPolicy::Fallback("travis".to_string()),
    };
    let profile = selector::select(
        &Registry::builtin(),
        &config,
        &snapshot("linux", &[]),
        None,
        &Overrides::default(),
        &Logger::new(false),
    )
    .unwrap();
    assert_eq!(profile.name, "travis");
}

// ---------------------------------------------------------------------------
// Rendering idempotence through the full selection path
// ---------------------------------------------------------------------------

#[test]
fn selection_and_rendering_are_idempotent() {
    let env = snapshot("linux", &[("NERSC_HOST", "edison"), ("HOME", "/home/c3")]);
    let registry = Registry::builtin();
    let config = SelectorConfig::default();
    let log = Logger::new(false);
    let renderer = Renderer::default();

    let reference = renderer.render(
        &selector::select(&registry, &config, &env, None, &Overrides::default(), &log).unwrap(),
    );
    for _ in 0..3 {
        let profile =
            selector::select(&registry, &config, &env, None, &Overrides::default(), &log).unwrap();
        assert_eq!(renderer.render(&profile), reference);
    }
}

//! The `generate` command: the whole pipeline in one linear pass.
//!
//! Config file → environment snapshot → selection → render → write. No step
//! retries or loops back; a fatal selection error aborts before any write.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::GenerateOpts;
use crate::config::{self, FileConfig};
use crate::environment::EnvironmentSnapshot;
use crate::logging::Logger;
use crate::profile::Overrides;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::selector::{self, NoMatchPolicy, SelectorConfig};
use crate::writer;

/// Run the generate command against the real process environment.
///
/// # Errors
///
/// Returns an error if the config file is malformed, profile selection
/// fails, or the descriptor cannot be written.
pub fn run(opts: &GenerateOpts, log: &Logger) -> Result<()> {
    let version = option_env!("MAKEGEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("makegen {version}"));

    let config_path = opts
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let file = config::load(&config_path)?;

    let snapshot = EnvironmentSnapshot::capture();
    run_with(opts, &file, &snapshot, log)
}

/// Run the pipeline against an explicit snapshot and file config.
///
/// # Errors
///
/// Returns an error if profile selection fails or the descriptor cannot be
/// written.
pub fn run_with(
    opts: &GenerateOpts,
    file: &FileConfig,
    snapshot: &EnvironmentSnapshot,
    log: &Logger,
) -> Result<()> {
    let settings = Settings::merge(opts, file);
    let registry = Registry::builtin();

    log.stage("Selecting profile");
    let profile = selector::select(
        &registry,
        &settings.selector,
        snapshot,
        settings.profile.as_deref(),
        &settings.overrides,
        log,
    )?;
    log.info(&format!("profile: {}", profile.name));

    log.stage("Rendering descriptor");
    let text = Renderer::default().render(&profile);

    if opts.dry_run {
        log.dry_run(&format!(
            "would write {} ({} bytes)",
            settings.output.display(),
            text.len()
        ));
        print!("{text}");
        return Ok(());
    }

    writer::write_descriptor(&settings.output, &text)?;
    log.info(&format!("wrote {}", settings.output.display()));
    Ok(())
}

/// Effective settings after merging CLI flags over file config over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit profile key, if any.
    pub profile: Option<String>,
    /// Field overrides for profile construction.
    pub overrides: Overrides,
    /// Selector configuration.
    pub selector: SelectorConfig,
    /// Descriptor output path.
    pub output: PathBuf,
}

impl Settings {
    /// Merge CLI options over file config over built-in defaults.
    #[must_use]
    pub fn merge(opts: &GenerateOpts, file: &FileConfig) -> Self {
        let defaults = SelectorConfig::default();

        let tie_break = opts.tie_break.or(file.tie_break).unwrap_or(defaults.tie_break);

        let fail = opts.fail_on_no_match || file.fail_on_no_match.unwrap_or(false);
        let no_match = if fail {
            NoMatchPolicy::Fail
        } else {
            let fallback = opts
                .fallback
                .clone()
                .or_else(|| file.fallback.clone())
                .unwrap_or_else(|| "other".to_string());
            NoMatchPolicy::Fallback(fallback)
        };

        let layout = opts.targets.or(file.targets);

        Self {
            profile: opts.profile.clone().or_else(|| file.profile.clone()),
            overrides: Overrides {
                cxx: opts.cxx.clone().or_else(|| file.cxx.clone()),
                cxxflags: opts.cxxflags.clone().or_else(|| file.cxxflags.clone()),
                targets: layout.map(crate::profile::TargetLayout::target_set),
            },
            selector: SelectorConfig { tie_break, no_match },
            output: opts
                .output
                .clone()
                .or_else(|| file.output.clone())
                .unwrap_or_else(|| PathBuf::from(writer::DEFAULT_OUTPUT)),
        }
    }
}

// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed output location and snapshot
// builders so each integration test can drive the full pipeline without
// touching the real process environment or working directory.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;

use makegen_cli::cli::GenerateOpts;
use makegen_cli::config::FileConfig;
use makegen_cli::environment::EnvironmentSnapshot;
use makegen_cli::logging::Logger;

/// Build a snapshot from a kernel name and variable pairs.
pub fn snapshot(kernel: &str, vars: &[(&str, &str)]) -> EnvironmentSnapshot {
    EnvironmentSnapshot::new(kernel, vars.iter().copied())
}

/// An isolated output directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    /// Create a fresh scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path for the descriptor inside the scratch directory.
    pub fn output(&self) -> PathBuf {
        self.dir.path().join("Makefile")
    }

    /// Path for a config file inside the scratch directory.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("makegen.toml")
    }

    /// Write a `makegen.toml` with the given content and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, content).expect("write config file");
        path
    }

    /// Generate options that write into this scratch directory.
    pub fn opts(&self) -> GenerateOpts {
        GenerateOpts {
            output: Some(self.output()),
            ..GenerateOpts::default()
        }
    }

    /// Read the generated descriptor.
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).expect("read generated Makefile")
    }
}

/// Run the generate pipeline against an explicit snapshot and file config.
pub fn run_generate(
    opts: &GenerateOpts,
    file: &FileConfig,
    env: &EnvironmentSnapshot,
) -> anyhow::Result<()> {
    makegen_cli::commands::generate::run_with(opts, file, env, &Logger::new(false))
}

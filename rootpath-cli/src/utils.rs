//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading and picking the root directory to resolve under.

use crate::error::CliError;
use rootpath::{Config, ConfigBuilder};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or the discovered `rootpath.yaml` plus the user file
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the root to resolve under.
///
/// An explicit `--root` wins over the configured one. Relative roots are
/// taken relative to the current directory.
pub fn select_root(explicit: Option<PathBuf>, config: &Config) -> Result<PathBuf, CliError> {
    let root = explicit.or_else(|| config.root.clone()).ok_or_else(|| {
        CliError::InvalidArguments(
            "no root directory given (use --root or set `root` in rootpath.yaml)".to_string(),
        )
    })?;

    absolutize(&root)
}

fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

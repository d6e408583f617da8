//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, PolicyConfig};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the default root.
pub const ENV_ROOT: &str = "ROOTPATH_ROOT";
/// Overrides `policy.allow_symlinks`.
pub const ENV_ALLOW_SYMLINKS: &str = "ROOTPATH_ALLOW_SYMLINKS";
/// Overrides `policy.allow_absolute_targets`.
pub const ENV_ALLOW_ABSOLUTE_TARGETS: &str = "ROOTPATH_ALLOW_ABSOLUTE_TARGETS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognised value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = env::var_os(ENV_ROOT) {
            if !root.is_empty() {
                config.root = Some(PathBuf::from(root));
            }
        }

        if let Ok(val) = env::var(ENV_ALLOW_SYMLINKS) {
            let policy = config.policy.get_or_insert_with(PolicyConfig::default);
            policy.allow_symlinks = Some(Self::parse_bool(ENV_ALLOW_SYMLINKS, &val)?);
        }

        if let Ok(val) = env::var(ENV_ALLOW_ABSOLUTE_TARGETS) {
            let policy = config.policy.get_or_insert_with(PolicyConfig::default);
            policy.allow_absolute_targets =
                Some(Self::parse_bool(ENV_ALLOW_ABSOLUTE_TARGETS, &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

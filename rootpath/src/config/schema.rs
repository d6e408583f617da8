//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rootpath: the default
//! root the CLI resolves under, and the policy applied to symlink hops.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered; unset
/// fields fall back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, PolicyConfig};
/// use std::path::PathBuf;
///
/// let config = Config {
///     root: Some(PathBuf::from("/srv/checkout")),
///     policy: Some(PolicyConfig {
///         allow_absolute_targets: Some(false),
///         ..Default::default()
///     }),
/// };
/// assert_eq!(config.root, Some(PathBuf::from("/srv/checkout")));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default trusted root for resolution.
    pub root: Option<PathBuf>,

    /// Symlink policy.
    pub policy: Option<PolicyConfig>,
}

/// Rules applied to every symlink hop.
///
/// # Examples
///
/// ```
/// use rootpath::config::PolicyConfig;
///
/// let policy: PolicyConfig = serde_yaml::from_str(
///     "allow_absolute_targets: false\ndenied_prefixes: [/.git]\n",
/// ).unwrap();
/// assert_eq!(policy.allow_absolute_targets, Some(false));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Whether symlinks may be expanded at all (default: true).
    pub allow_symlinks: Option<bool>,

    /// Whether absolute link targets are accepted (default: true).
    ///
    /// Absolute targets are always reinterpreted under the root; this only
    /// controls whether they are rejected outright.
    pub allow_absolute_targets: Option<bool>,

    /// Root-relative locations under which no symlink may be expanded.
    pub denied_prefixes: Option<Vec<PathBuf>>,
}

impl Config {
    /// The effective policy, empty if none was configured.
    #[must_use]
    pub fn policy_or_default(&self) -> PolicyConfig {
        self.policy.clone().unwrap_or_default()
    }
}

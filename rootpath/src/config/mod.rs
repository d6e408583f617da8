//! Configuration system for rootpath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `rootpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTPATH_*`)
//! 3. Project config (`rootpath.yaml`, nearest ancestor of the working dir)
//! 4. User config (`~/.rootpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # File format
//!
//! ```yaml
//! root: /srv/checkout
//! policy:
//!   allow_symlinks: true
//!   allow_absolute_targets: false
//!   denied_prefixes: [/.git]
//! ```
//!
//! # Examples
//!
//! ```
//! use rootpath::config::ConfigBuilder;
//! use rootpath::observer::SymlinkPolicy;
//!
//! let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
//! let policy = SymlinkPolicy::from_config(&config.policy_or_default());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, PolicyConfig};
pub use validator::ConfigValidator;

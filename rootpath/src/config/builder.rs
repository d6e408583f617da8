//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Builds the effective configuration from all sources.
///
/// Precedence, lowest to highest: user file, project file, environment,
/// programmatic overrides. The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { root: Some(PathBuf::from("/srv")), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.root, Some(PathBuf::from("/srv")));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start the project file search from (default: cwd).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (default: `~/.rootpath`).
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering a project file.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply a configuration on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ROOTPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else if let Some(ref file) = self.config_file {
            ConfigLoader::load_file(file)?
        } else {
            let working_dir = match self.working_dir {
                Some(ref dir) => dir.clone(),
                None => env::current_dir()?,
            };
            ConfigMerger::merge(ConfigLoader::load_all(
                &working_dir,
                self.user_dir.as_deref(),
            )?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

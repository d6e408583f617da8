//! Command to validate a rootpath configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use rootpath::config::{Config, ConfigValidator};
use std::path::PathBuf;

/// Validate a rootpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let config: Config = match serde_yaml::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!("Configuration is valid");
                if global.verbose {
                    let rendered = serde_yaml::to_string(&config)
                        .map_err(|e| CliError::Config(e.to_string()))?;
                    print!("{rendered}");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}

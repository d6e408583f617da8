//! Configuration validation.

use crate::config::schema::{Config, PolicyConfig};
use crate::error::{Error, Result};
use std::path::{Component, Path};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if:
    /// - `root` is not an absolute path
    /// - a denied prefix is not rooted or contains `..`
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.root {
            Self::validate_root(root)?;
        }
        if let Some(ref policy) = config.policy {
            Self::validate_policy(policy)?;
        }
        Ok(())
    }

    fn validate_root(root: &Path) -> Result<()> {
        if !root.is_absolute() {
            return Err(Error::Validation {
                field: "root".into(),
                message: format!("root must be an absolute path, got '{}'", root.display()),
            });
        }
        Ok(())
    }

    fn validate_policy(policy: &PolicyConfig) -> Result<()> {
        for prefix in policy.denied_prefixes.iter().flatten() {
            if !prefix.has_root() {
                return Err(Error::Validation {
                    field: "policy.denied_prefixes".into(),
                    message: format!(
                        "'{}' must be root-relative and start with a separator",
                        prefix.display()
                    ),
                });
            }
            if prefix.components().any(|c| c == Component::ParentDir) {
                return Err(Error::Validation {
                    field: "policy.denied_prefixes".into(),
                    message: format!("'{}' must not contain '..'", prefix.display()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn with_prefixes(prefixes: &[&str]) -> Config {
        Config {
            policy: Some(PolicyConfig {
                denied_prefixes: Some(prefixes.iter().map(PathBuf::from).collect()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_root_is_valid() {
        let config = Config {
            root: Some(PathBuf::from("/srv/checkout")),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_relative_root_is_invalid() {
        let config = Config {
            root: Some(PathBuf::from("checkout")),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(format!("{err}").contains("root"));
    }

    #[test]
    fn test_denied_prefixes() {
        assert!(ConfigValidator::validate(&with_prefixes(&["/.git", "/a/b"])).is_ok());
        assert!(ConfigValidator::validate(&with_prefixes(&[".git"])).is_err());
        assert!(ConfigValidator::validate(&with_prefixes(&["/a/../b"])).is_err());
    }
}

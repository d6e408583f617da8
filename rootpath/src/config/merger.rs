//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PolicyConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootpath::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { root: Some(PathBuf::from("/low")), ..Default::default() };
/// let high = Config { root: Some(PathBuf::from("/high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root, Some(PathBuf::from("/high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `root`: source overwrites if set
    /// - policy flags: field-by-field, source overwrites if set
    /// - `denied_prefixes`: accumulated across sources, duplicates dropped
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if let Some(ref source_policy) = source.policy {
            let policy = target.policy.get_or_insert_with(PolicyConfig::default);
            Self::merge_policy(policy, source_policy);
        }
    }

    fn merge_policy(target: &mut PolicyConfig, source: &PolicyConfig) {
        if source.allow_symlinks.is_some() {
            target.allow_symlinks = source.allow_symlinks;
        }
        if source.allow_absolute_targets.is_some() {
            target.allow_absolute_targets = source.allow_absolute_targets;
        }
        if let Some(ref prefixes) = source.denied_prefixes {
            let merged = target.denied_prefixes.get_or_insert_with(Vec::new);
            for prefix in prefixes {
                if !merged.contains(prefix) {
                    merged.push(prefix.clone());
                }
            }
        }
    }
}

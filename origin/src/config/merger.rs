//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use origin::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { shell: Some(PathBuf::from("/bin/bash")), ..Default::default() };
/// let high = Config { shell: Some(PathBuf::from("/bin/zsh")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.shell, Some(PathBuf::from("/bin/zsh")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
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
    /// Every field is replaced as a whole when set in `source`; search
    /// paths are not concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.shell.is_some() {
            target.shell.clone_from(&source.shell);
        }

        if source.tables.is_some() {
            target.tables.clone_from(&source.tables);
        }

        if source.search_path.is_some() {
            target.search_path.clone_from(&source.search_path);
        }

        if source.introspect.is_some() {
            target.introspect = source.introspect;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

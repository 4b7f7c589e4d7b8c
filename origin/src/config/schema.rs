//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered: a field left
/// unset in a higher-precedence source keeps the lower-precedence value.
///
/// # Examples
///
/// ```
/// use origin::config::Config;
/// use std::path::PathBuf;
///
/// let config: Config = serde_yaml::from_str(
///     "shell: /bin/zsh\nsearch_path: [/usr/local/bin, /usr/bin]\n",
/// ).unwrap();
/// assert_eq!(config.shell, Some(PathBuf::from("/bin/zsh")));
/// assert_eq!(config.search_path.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The shell whose tables are consulted.
    pub shell: Option<PathBuf>,

    /// A YAML table snapshot to load instead of introspecting the shell.
    pub tables: Option<PathBuf>,

    /// Directories searched for bare command names, in order.
    pub search_path: Option<Vec<PathBuf>>,

    /// Whether to run the shell to read its tables when no snapshot is set.
    pub introspect: Option<bool>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Whether introspection is enabled (the default).
    #[must_use]
    pub fn introspect_enabled(&self) -> bool {
        self.introspect.unwrap_or(true)
    }

    /// The configured search path, or an empty one.
    #[must_use]
    pub fn search_directories(&self) -> Vec<PathBuf> {
        self.search_path.clone().unwrap_or_default()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

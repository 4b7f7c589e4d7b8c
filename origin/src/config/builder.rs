//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from the user file, the environment and programmatic
/// overrides.
///
/// # Examples
///
/// ```
/// use origin::config::{Config, ConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         shell: Some(PathBuf::from("/bin/zsh")),
///         ..Config::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.shell, Some(PathBuf::from("/bin/zsh")));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read the user configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Read the user configuration from `path` instead of the default location.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble the configuration.
    ///
    /// Precedence, highest first: programmatic overrides, `ORIGIN_*`
    /// variables, the user configuration file. `SHELL` and `PATH` fill in
    /// whatever is still unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or an
    /// environment variable is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.config_file.as_deref())? {
                sources.push(source);
            }
        }
        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }
        if !self.skip_env {
            EnvironmentConfig::apply_fallbacks(&mut config);
        }

        Ok(config)
    }
}

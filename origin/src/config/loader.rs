//! Configuration file discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::expand_tilde;

/// Environment variable naming an alternative user configuration file.
pub const CONFIG_PATH_ENV: &str = "ORIGIN_CONFIG";

/// A configuration file and what it set.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use origin::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file if there is one.
    ///
    /// `path` overrides the location; otherwise `ORIGIN_CONFIG` is
    /// consulted, then `~/.origin/config.yaml`. Only the home default may be
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a file named by `path` or `ORIGIN_CONFIG` does
    /// not exist, or if the file cannot be read or parsed.
    pub fn load_user_config(path: Option<&Path>) -> Result<Option<ConfigSource>> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let config_path = match explicit {
            Some(path) => path,
            None => match Self::user_config_path() {
                Some(path) if path.exists() => path,
                Some(path) => {
                    log::debug!("no configuration file at '{}'", path.display());
                    return Ok(None);
                }
                None => return Ok(None),
            },
        };

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A leading `~` in any configured path is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigurationFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading configuration from '{}'", path.display());

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&contents)?;
        Self::expand_paths(config)
    }

    /// Location of the user configuration file.
    ///
    /// Returns `None` if no home directory can be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        home::home_dir().map(|home| home.join(".origin").join("config.yaml"))
    }

    fn expand_paths(mut config: Config) -> Result<Config> {
        if let Some(shell) = &config.shell {
            config.shell = Some(expand_tilde(shell)?);
        }
        if let Some(tables) = &config.tables {
            config.tables = Some(expand_tilde(tables)?);
        }
        if let Some(dirs) = &config.search_path {
            config.search_path = Some(
                dirs.iter()
                    .map(|dir| expand_tilde(dir))
                    .collect::<Result<Vec<_>>>()?,
            );
        }
        Ok(config)
    }
}

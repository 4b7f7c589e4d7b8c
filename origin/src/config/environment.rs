//! Environment variable handling for configuration overrides.
//!
//! `ORIGIN_*` variables override the configuration file. The standard
//! `SHELL` and `PATH` variables are only fallbacks: they fill in the shell
//! and search path when nothing else configured them.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Shell override.
pub const SHELL_ENV: &str = "ORIGIN_SHELL";
/// Table snapshot file.
pub const TABLES_ENV: &str = "ORIGIN_TABLES";
/// Search path override, in `PATH` syntax.
pub const PATH_ENV: &str = "ORIGIN_PATH";
/// Enable or disable shell introspection.
pub const INTROSPECT_ENV: &str = "ORIGIN_INTROSPECT";
/// Default output format.
pub const FORMAT_ENV: &str = "ORIGIN_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use origin::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// EnvironmentConfig::apply_fallbacks(&mut config);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `ORIGIN_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(shell) = non_empty_var(SHELL_ENV) {
            config.shell = Some(PathBuf::from(shell));
        }

        if let Some(tables) = non_empty_var(TABLES_ENV) {
            config.tables = Some(PathBuf::from(tables));
        }

        if let Some(path) = env::var_os(PATH_ENV) {
            config.search_path = Some(env::split_paths(&path).collect());
        }

        if let Ok(val) = env::var(INTROSPECT_ENV) {
            config.introspect = Some(Self::parse_bool(INTROSPECT_ENV, &val)?);
        }

        if let Ok(val) = env::var(FORMAT_ENV) {
            config.output_format = Some(val.parse::<OutputFormat>().map_err(|_| {
                Error::Validation {
                    field: FORMAT_ENV.into(),
                    message: format!("invalid output format '{val}' (expected human/terse/json)"),
                }
            })?);
        }

        Ok(())
    }

    /// Fill the shell from `SHELL` and the search path from `PATH` where
    /// they are still unset.
    pub fn apply_fallbacks(config: &mut Config) {
        if config.shell.is_none() {
            config.shell = non_empty_var("SHELL").map(PathBuf::from);
        }
        if config.search_path.is_none() {
            config.search_path = env::var_os("PATH").map(|path| env::split_paths(&path).collect());
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

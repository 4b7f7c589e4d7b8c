//! Utility functions for CLI operations.
//!
//! Configuration loading and shell table acquisition shared by the
//! command implementations.

use crate::error::CliError;
use origin::{Config, ConfigBuilder, Error, Introspector, ShellContext};
use std::path::PathBuf;

/// Shell assumed for a table snapshot that does not name one.
const DEFAULT_SHELL: &str = "/bin/sh";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Log every lookup.
    pub verbose: bool,

    /// Suppress warnings.
    pub quiet: bool,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. `SHELL` and `PATH`, then built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, flags: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(flags);
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }
    builder.build().map_err(CliError::from)
}

/// Obtain the shell tables described by `config`.
///
/// A configured snapshot file is loaded and must be valid. Otherwise the
/// shell is introspected; if that is impossible or fails, a warning is
/// logged and resolution continues with empty tables, so only the search
/// path is consulted.
pub fn load_tables(config: &Config) -> Result<ShellContext, CliError> {
    if let Some(tables) = &config.tables {
        let default_shell = config
            .shell
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));
        return ShellContext::load(tables, &default_shell).map_err(CliError::from);
    }

    let Some(shell) = config.shell.clone() else {
        log::warn!("{}; only PATH will be searched", Error::NoShell);
        return Ok(ShellContext::new(DEFAULT_SHELL));
    };

    if !config.introspect_enabled() {
        log::debug!("introspection disabled, using empty tables");
        return Ok(ShellContext::new(shell));
    }

    match Introspector::new(&shell).and_then(|introspector| introspector.introspect()) {
        Ok(tables) => Ok(tables),
        Err(e) => {
            log::warn!("{e}; only PATH will be searched");
            Ok(ShellContext::new(shell))
        }
    }
}

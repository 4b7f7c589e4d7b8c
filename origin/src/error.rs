//! Error types for the origin library.
//!
//! Resolution itself never fails: missing commands, alias cycles, symlink
//! loops and unreadable search directories all end up in the trace. The
//! errors here cover the surroundings of a resolution, such as loading
//! configuration or asking a shell for its tables.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an origin error.
///
/// # Examples
///
/// ```
/// use origin::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/bin/ls")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the origin library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or table snapshot file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file is missing or could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigurationFile {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The shell cannot be introspected because its dialect is unknown.
    #[error("unsupported shell '{}': only bash and zsh can be introspected", shell.display())]
    UnsupportedShell {
        /// The shell that was requested.
        shell: PathBuf,
    },

    /// No shell was configured and none could be found in the environment.
    #[error("no shell configured: set SHELL or pass --shell")]
    NoShell,

    /// The shell ran but did not report its tables.
    #[error("introspection of shell '{}' failed: {reason}", shell.display())]
    Introspection {
        /// The shell that was queried.
        shell: PathBuf,
        /// Why the query failed.
        reason: String,
    },

    /// JSON serialization of a report failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error came from loading configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use origin::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "ORIGIN_INTROSPECT".to_string(),
    ///     message: "expected a boolean".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::ConfigurationFile { .. } | Self::Validation { .. }
        )
    }

    /// Check if the error came from asking a shell for its tables.
    #[must_use]
    pub fn is_introspection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedShell { .. } | Self::NoShell | Self::Introspection { .. }
        )
    }
}

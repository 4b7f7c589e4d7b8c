//! CLI-specific error types with exit codes.
//!
//! Resolution outcomes are not errors: "no match" is exit code 1 and comes
//! from the report. The errors here stop a resolution from running at all.

use std::fmt;
use origin::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: The command resolved (not an error)
    /// - 1: No match (not an error)
    /// - 2: Usage error (reported before any `CliError` exists)
    /// - 3: Configuration error
    /// - 4: Any other library error, I/O included
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) if lib_err.is_configuration() => 3,
            CliError::Library(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_configuration_errors_exit_3() {
        let err = CliError::from(LibError::Validation {
            field: "ORIGIN_INTROSPECT".to_string(),
            message: "expected a boolean".to_string(),
        });
        assert_eq!(err.exit_code(), 3);

        let missing = CliError::from(LibError::ConfigurationFile {
            path: PathBuf::from("/nonexistent/config.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(missing.exit_code(), 3);
    }

    #[test]
    fn test_other_errors_exit_4() {
        let err = CliError::from(LibError::Introspection {
            shell: PathBuf::from("/bin/bash"),
            reason: "killed".to_string(),
        });
        assert_eq!(err.exit_code(), 4);

        let io = CliError::from(LibError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        )));
        assert_eq!(io.exit_code(), 4);
        assert!(io.to_string().contains("boom"));
    }
}

//! Rendering resolutions for people and programs.
//!
//! The human format is a stable, line-oriented trace: one line per step, in
//! discovery order, followed by a `no match` line when nothing matched.
//! Tools grep this output, so the wording of each line is fixed.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolve::{Resolution, Verdict};
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, TerseFormatter};

/// Exit code when the token resolved.
pub const EXIT_FOUND: i32 = 0;

/// Exit code when nothing matched.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Exit code for a malformed invocation.
pub const EXIT_USAGE: i32 = 2;

/// Trait for turning a resolution into text.
pub trait OutputFormatter {
    /// Format `resolution`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution cannot be serialized.
    fn format(&self, resolution: &Resolution) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full step-by-step trace.
    #[default]
    Human,
    /// Only the final step, or the `no match` line.
    Terse,
    /// The resolution as JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Terse => Box::new(TerseFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Terse => write!(f, "terse"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "terse" => Ok(Self::Terse),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected human, terse or json)"),
            }),
        }
    }
}

/// Rendered output and the exit code that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The text to print, without a trailing newline.
    pub text: String,
    /// The process exit code.
    pub exit_code: i32,
}

/// Render `resolution` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use origin::output::{render, OutputFormat, EXIT_NOT_FOUND};
/// use origin::resolve::Resolver;
/// use origin::shell::ShellContext;
///
/// let tables = ShellContext::new("/bin/bash");
/// let resolution = Resolver::new(&tables, Vec::new()).resolve("miss");
///
/// let report = render(&resolution, OutputFormat::Human).unwrap();
/// assert_eq!(report.text, "no match for 'miss'");
/// assert_eq!(report.exit_code, EXIT_NOT_FOUND);
/// ```
pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<Report> {
    let text = format.create_formatter().format(resolution)?;
    Ok(Report {
        text,
        exit_code: exit_code(&resolution.verdict),
    })
}

/// The exit code for a verdict.
#[must_use]
pub fn exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Found(_) => EXIT_FOUND,
        Verdict::NotFound => EXIT_NOT_FOUND,
    }
}

//! Explain how a single token resolves.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use origin::output::{render, OutputFormat};
use origin::{Config, Resolver};

use crate::error::CliError;
use crate::utils::{load_configuration, load_tables, GlobalOptions};

/// Arguments for explaining a command.
#[derive(Args)]
pub struct ExplainCommand {
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Shell whose aliases, builtins and functions are consulted
    #[arg(long, value_name = "PATH")]
    pub shell: Option<PathBuf>,

    /// Load shell tables from a YAML snapshot instead of running the shell
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,

    /// Do not run the shell to read its tables
    #[arg(long)]
    pub no_introspect: bool,

    /// Search these directories (PATH syntax) instead of PATH
    #[arg(long, value_name = "DIRS")]
    pub path: Option<OsString>,

    /// The command to explain, a bare name or a path
    pub command: String,
}

/// Output format selection.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Every step of the resolution
    Human,
    /// Only the final step
    Terse,
    /// The resolution as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Human => Self::Human,
            FormatArg::Terse => Self::Terse,
            FormatArg::Json => Self::Json,
        }
    }
}

impl ExplainCommand {
    /// Resolve the command, print the report, and return the exit code.
    pub fn execute(&self, global: &GlobalOptions) -> Result<i32, CliError> {
        let config = load_configuration(global, self.overrides())?;
        let tables = load_tables(&config)?;

        let resolver = Resolver::new(&tables, config.search_directories());
        let resolution = resolver.resolve(&self.command);

        let report = render(&resolution, config.format())?;
        if !report.text.is_empty() {
            println!("{}", report.text);
        }
        Ok(report.exit_code)
    }

    /// Configuration set by flags, applied over every other source.
    fn overrides(&self) -> Config {
        Config {
            shell: self.shell.clone(),
            tables: self.tables.clone(),
            search_path: self
                .path
                .as_ref()
                .map(|dirs| env::split_paths(dirs).collect()),
            introspect: self.no_introspect.then_some(false),
            output_format: self.format.map(OutputFormat::from),
        }
    }
}

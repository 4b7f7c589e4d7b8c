//! CLI structure and argument definitions.

use crate::commands::ExplainCommand;
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed for any malformed invocation.
pub const USAGE: &str = "origin [-v] command";

/// Explain how an interactive shell resolves a command.
#[derive(Parser)]
#[command(name = "origin")]
#[command(version, about = "Explain how the shell resolves a command", long_about = None)]
#[command(override_usage = USAGE)]
pub struct Cli {
    /// Log every lookup to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.origin/config.yaml
    #[arg(long, value_name = "FILE", env = "ORIGIN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub command: ExplainCommand,
}

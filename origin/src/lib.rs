#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # origin
//!
//! A library that explains how an interactive shell resolves a command.
//!
//! Given a token as it would be typed at a prompt, origin walks the same
//! lookups the shell performs (alias expansion, builtins, functions, then
//! the search path with symlink chains) and records every step it takes.
//!
//! ## Core Types
//!
//! - [`ShellTables`] and [`ShellContext`]: the shell's alias, builtin and
//!   function tables
//! - [`Resolver`] and [`Resolution`]: the resolution engine and its trace
//! - [`Classification`]: what a filesystem entry is
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use origin::output::{render, OutputFormat};
//! use origin::{Resolver, ShellContext};
//!
//! let tables = ShellContext::new("/bin/bash")
//!     .with_alias("t", "type -a")
//!     .with_builtin("type");
//!
//! let resolution = Resolver::new(&tables, Vec::new()).resolve("t");
//! let report = render(&resolution, OutputFormat::Human).unwrap();
//! assert_eq!(
//!     report.text,
//!     "'t' is an alias for 'type' in shell '/bin/bash': 'type -a'\n\
//!      'type' is built into shell '/bin/bash'"
//! );
//! assert_eq!(report.exit_code, 0);
//! ```

pub mod alias;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolve;
pub mod shell;
pub mod words;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{render, OutputFormat, Report};
pub use path::Classification;
pub use resolve::{Resolution, ResolutionStep, Resolver, Verdict};
pub use shell::{Introspector, ShellContext, ShellKind, ShellTables};

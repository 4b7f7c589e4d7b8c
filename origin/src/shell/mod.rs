//! Shell tables: aliases, builtins and functions.
//!
//! The resolution engine only sees the [`ShellTables`] trait. A
//! [`ShellContext`] is the usual implementation: a read-only snapshot built
//! either by asking a live shell ([`Introspector`]) or by loading a YAML
//! snapshot file ([`ShellContext::load`]).
//!
//! # Examples
//!
//! ```
//! use origin::shell::{ShellContext, ShellTables};
//!
//! let tables = ShellContext::new("/bin/bash")
//!     .with_alias("ll", "ls -alF")
//!     .with_builtin("type");
//!
//! assert_eq!(tables.lookup_alias("ll").unwrap().definition, "ls -alF");
//! assert!(tables.lookup_builtin("type").is_some());
//! assert!(tables.lookup_function("type").is_none());
//! ```

mod context;
pub mod introspect;
mod kind;
mod snapshot;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use context::ShellContext;
pub use introspect::Introspector;
pub use kind::ShellKind;

/// An alias and its literal definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// The alias name.
    pub name: String,
    /// The alias body exactly as the shell stores it, e.g. `ls -alF`.
    pub definition: String,
}

/// Whether a name is built into the shell as a command or as syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinKind {
    /// A builtin command such as `cd` or `type`.
    Builtin,
    /// A reserved word such as `if` or `[[`.
    Keyword,
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Keyword => write!(f, "keyword"),
        }
    }
}

/// A name built into the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltinEntry {
    /// The builtin name.
    pub name: String,
    /// Builtin command or keyword.
    pub kind: BuiltinKind,
}

/// A shell function and its definition as the shell prints it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    /// The function name.
    pub name: String,
    /// The verbatim multi-line definition.
    pub body: String,
}

/// Exact-name lookups into a shell's tables.
///
/// Implementations are read-only snapshots; the engine may query them any
/// number of times during a resolution.
#[cfg_attr(test, mockall::automock)]
pub trait ShellTables {
    /// Path of the shell the tables belong to.
    fn shell(&self) -> PathBuf;

    /// Look up an alias by exact name.
    fn lookup_alias(&self, name: &str) -> Option<AliasEntry>;

    /// Look up a builtin or keyword by exact name.
    fn lookup_builtin(&self, name: &str) -> Option<BuiltinEntry>;

    /// Look up a function by exact name.
    fn lookup_function(&self, name: &str) -> Option<FunctionEntry>;
}

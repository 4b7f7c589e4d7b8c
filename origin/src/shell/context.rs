//! The in-memory table snapshot.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{AliasEntry, BuiltinEntry, BuiltinKind, FunctionEntry, ShellTables};

/// A read-only snapshot of one shell's alias, builtin and function tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellContext {
    shell: PathBuf,
    aliases: BTreeMap<String, String>,
    builtins: BTreeMap<String, BuiltinKind>,
    functions: BTreeMap<String, String>,
}

impl ShellContext {
    /// Create empty tables for `shell`.
    #[must_use]
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            ..Self::default()
        }
    }

    /// Add an alias.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.insert_alias(name, definition);
        self
    }

    /// Add a builtin command.
    #[must_use]
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.insert_builtin(name, BuiltinKind::Builtin);
        self
    }

    /// Add a reserved word.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>) -> Self {
        self.insert_builtin(name, BuiltinKind::Keyword);
        self
    }

    /// Add a function.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert_function(name, body);
        self
    }

    /// Add or replace an alias.
    pub fn insert_alias(&mut self, name: impl Into<String>, definition: impl Into<String>) {
        self.aliases.insert(name.into(), definition.into());
    }

    /// Add a builtin or keyword. A name listed as both stays a keyword.
    pub fn insert_builtin(&mut self, name: impl Into<String>, kind: BuiltinKind) {
        let entry = self.builtins.entry(name.into()).or_insert(kind);
        if kind == BuiltinKind::Keyword {
            *entry = kind;
        }
    }

    /// Add or replace a function.
    pub fn insert_function(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.functions.insert(name.into(), body.into());
    }

    /// Path of the shell these tables came from.
    #[must_use]
    pub fn shell_path(&self) -> &Path {
        &self.shell
    }

    /// Number of aliases.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Number of builtins and keywords.
    #[must_use]
    pub fn builtin_count(&self) -> usize {
        self.builtins.len()
    }

    /// Number of functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl ShellTables for ShellContext {
    fn shell(&self) -> PathBuf {
        self.shell.clone()
    }

    fn lookup_alias(&self, name: &str) -> Option<AliasEntry> {
        self.aliases.get(name).map(|definition| AliasEntry {
            name: name.to_string(),
            definition: definition.clone(),
        })
    }

    fn lookup_builtin(&self, name: &str) -> Option<BuiltinEntry> {
        self.builtins.get(name).map(|kind| BuiltinEntry {
            name: name.to_string(),
            kind: *kind,
        })
    }

    fn lookup_function(&self, name: &str) -> Option<FunctionEntry> {
        self.functions.get(name).map(|body| FunctionEntry {
            name: name.to_string(),
            body: body.clone(),
        })
    }
}

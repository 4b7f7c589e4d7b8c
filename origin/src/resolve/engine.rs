//! The resolution engine.

use std::path::{Path, PathBuf};

use super::step::{ResolutionStep, Target, Token, Verdict};
use super::Resolution;
use crate::alias;
use crate::path::{self, Classification};
use crate::shell::{BuiltinEntry, BuiltinKind, ShellTables};

/// Name of the dot-source builtin.
const DOT: &str = ".";

/// Resolves tokens against one shell's tables and one search path.
///
/// # Examples
///
/// ```
/// use origin::resolve::{Resolver, Target, Verdict};
/// use origin::shell::ShellContext;
///
/// let tables = ShellContext::new("/bin/bash").with_builtin("type");
/// let resolver = Resolver::new(&tables, Vec::new());
///
/// let resolution = resolver.resolve("type");
/// assert_eq!(
///     resolution.verdict,
///     Verdict::Found(Target::Builtin { name: "type".to_string() })
/// );
/// assert!(!resolver.resolve("miss").is_found());
/// ```
pub struct Resolver<'a, T: ShellTables + ?Sized> {
    tables: &'a T,
    search_path: Vec<PathBuf>,
}

impl<'a, T: ShellTables + ?Sized> Resolver<'a, T> {
    /// Create a resolver over `tables`, searching `search_path` in order.
    #[must_use]
    pub fn new(tables: &'a T, search_path: Vec<PathBuf>) -> Self {
        Self {
            tables,
            search_path,
        }
    }

    /// The directories searched for bare names.
    #[must_use]
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Resolve `token` the way an interactive shell would.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Resolution {
        let mut steps = Vec::new();
        log::debug!("looking for '{token}'");

        let verdict = match Token::parse(token) {
            Token::Path(path) => inspect(&path, &mut steps),
            Token::Name(name) => self.resolve_name(&name, &mut steps),
        };

        Resolution {
            token: token.to_string(),
            steps,
            verdict,
        }
    }

    fn resolve_name(&self, name: &str, steps: &mut Vec<ResolutionStep>) -> Verdict {
        let expansion = alias::expand(name, self.tables);
        let expanded = expansion.expanded();
        steps.extend(
            expansion
                .steps
                .into_iter()
                .map(ResolutionStep::AliasExpansion),
        );

        if expanded {
            log::debug!("looking for '{}'", expansion.ending_name);
        }
        // A command word with a slash is run as a path, never looked up.
        let name = match Token::parse(&expansion.ending_name) {
            Token::Path(path) => return inspect(&path, steps),
            Token::Name(name) => name,
        };
        if name.is_empty() {
            return Verdict::NotFound;
        }

        if let Some(builtin) = self.lookup_builtin(&name) {
            steps.push(ResolutionStep::Builtin {
                name: builtin.name.clone(),
                shell: self.tables.shell(),
                kind: builtin.kind,
            });
            return Verdict::Found(Target::Builtin { name: builtin.name });
        }

        if let Some(function) = self.tables.lookup_function(&name) {
            steps.push(ResolutionStep::Function {
                name: function.name.clone(),
                shell: self.tables.shell(),
                body: function.body,
            });
            return Verdict::Found(Target::Function {
                name: function.name,
            });
        }

        match path::search(&name, &self.search_path) {
            Some(hit) => {
                steps.push(ResolutionStep::PathHit {
                    name,
                    directory: hit.directory,
                    resolved_path: hit.candidate.clone(),
                });
                inspect(&hit.candidate, steps)
            }
            None => {
                log::debug!("'{name}' not found in PATH");
                Verdict::NotFound
            }
        }
    }

    fn lookup_builtin(&self, name: &str) -> Option<BuiltinEntry> {
        self.tables.lookup_builtin(name).or_else(|| {
            (name == DOT).then(|| BuiltinEntry {
                name: DOT.to_string(),
                kind: BuiltinKind::Builtin,
            })
        })
    }
}

/// Classify `entry`, following and recording any symlink chain.
fn inspect(entry: &Path, steps: &mut Vec<ResolutionStep>) -> Verdict {
    let chain = path::resolve_symlink_chain(entry);
    steps.extend(chain.hops.into_iter().map(|hop| ResolutionStep::SymlinkHop {
        from: hop.from,
        to: hop.to,
        cycle: false,
    }));

    if chain.cycle {
        if let Classification::Symlink(target) = &chain.classification {
            steps.push(ResolutionStep::SymlinkHop {
                from: chain.terminal.clone(),
                to: path::symlink::follow(&chain.terminal, target),
                cycle: true,
            });
        }
    } else {
        steps.push(ResolutionStep::FileClassification {
            path: chain.terminal.clone(),
            kind: chain.classification.clone(),
        });
    }

    Verdict::for_file(&chain.terminal, chain.classification)
}

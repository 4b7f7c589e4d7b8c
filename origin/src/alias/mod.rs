//! Alias expansion.
//!
//! An alias is expanded by taking the first word of its definition and
//! looking that word up again, the same way an interactive shell re-checks
//! the first word of an expanded alias. Expansion stops at the first name
//! that is not an alias, or at a name that was already expanded in this
//! resolution. A repeat is not an error: `alias ls='ls -l'` is the common
//! case and simply means the next lookup skips the alias table.

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::shell::ShellTables;
use crate::words;

/// One alias substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasStep {
    /// The alias that was expanded.
    pub from: String,
    /// The command word of the definition.
    pub to: String,
    /// The shell the alias is defined in.
    pub shell: PathBuf,
    /// The full definition, verbatim.
    pub definition: String,
}

/// The result of expanding a name through the alias table.
///
/// `ending_name` is the command word the shell would go on to run: after a
/// cycle such as `a -> b -> a` that is `a`, looked up without its alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Substitutions in the order they were made.
    pub steps: Vec<AliasStep>,
    /// The name left after expansion.
    ///
    /// Empty if the last alias had no command word (e.g. `alias x='FOO=1'`).
    pub ending_name: String,
}

impl Expansion {
    /// Whether any alias was expanded.
    #[must_use]
    pub fn expanded(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Expand `name` through the alias table of `tables`.
///
/// # Examples
///
/// ```
/// use origin::alias::expand;
/// use origin::shell::ShellContext;
///
/// let tables = ShellContext::new("/bin/bash")
///     .with_alias("ll", "ls -alF")
///     .with_alias("ls", "ls -l");
///
/// let expansion = expand("ll", &tables);
/// assert_eq!(expansion.steps.len(), 2);
/// assert_eq!(expansion.ending_name, "ls");
/// ```
pub fn expand<T: ShellTables + ?Sized>(name: &str, tables: &T) -> Expansion {
    let mut steps = Vec::new();
    let mut visited = HashSet::new();
    let mut current = name.to_string();

    while let Some(alias) = tables.lookup_alias(&current) {
        visited.insert(current.clone());

        let next = words::command_word(&alias.definition).unwrap_or_default();
        steps.push(AliasStep {
            from: current.clone(),
            to: next.clone(),
            shell: tables.shell(),
            definition: alias.definition,
        });

        if next.is_empty() {
            log::debug!("alias '{current}' has no command word");
        } else if visited.contains(&next) {
            log::debug!("alias '{next}' already expanded, not expanding again");
        }
        let stop = next.is_empty() || visited.contains(&next);
        current = next;
        if stop {
            break;
        }
    }

    Expansion {
        steps,
        ending_name: current,
    }
}

//! Trace and verdict types.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::alias::AliasStep;
use crate::path::Classification;
use crate::shell::BuiltinKind;

/// A token as typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare command name, looked up through the shell's tables and PATH.
    Name(String),
    /// Anything containing a `/`, inspected on the filesystem as is.
    Path(PathBuf),
}

impl Token {
    /// Split a raw token into a name or a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use origin::resolve::Token;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Token::parse("ls"), Token::Name("ls".to_string()));
    /// assert_eq!(Token::parse("./run"), Token::Path(PathBuf::from("./run")));
    /// assert_eq!(Token::parse("."), Token::Name(".".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.contains('/') {
            Self::Path(PathBuf::from(raw))
        } else {
            Self::Name(raw.to_string())
        }
    }
}

/// One observation made while resolving a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ResolutionStep {
    /// An alias was expanded.
    AliasExpansion(AliasStep),
    /// The name is built into the shell.
    Builtin {
        /// The builtin name.
        name: String,
        /// The shell it is built into.
        shell: PathBuf,
        /// Builtin command or reserved word.
        kind: BuiltinKind,
    },
    /// The name is a shell function.
    Function {
        /// The function name.
        name: String,
        /// The shell that defines it.
        shell: PathBuf,
        /// The verbatim definition.
        body: String,
    },
    /// The name was found in a search path directory.
    PathHit {
        /// The name that was searched for.
        name: String,
        /// The directory it was found in.
        directory: PathBuf,
        /// The full path of the entry.
        resolved_path: PathBuf,
    },
    /// A symlink was followed.
    SymlinkHop {
        /// The link.
        from: PathBuf,
        /// Where it points.
        to: PathBuf,
        /// Whether `from` had already been followed in this chain.
        cycle: bool,
    },
    /// The final entry was classified.
    FileClassification {
        /// The classified path.
        path: PathBuf,
        /// What is there.
        kind: Classification,
    },
}

/// What a token resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    /// A shell builtin or reserved word.
    Builtin {
        /// The builtin name.
        name: String,
    },
    /// A shell function.
    Function {
        /// The function name.
        name: String,
    },
    /// A filesystem entry.
    File {
        /// Where the resolution ended.
        path: PathBuf,
        /// What is there.
        classification: Classification,
    },
}

/// Terminal outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "target", rename_all = "snake_case")]
pub enum Verdict {
    /// The token resolved.
    Found(Target),
    /// Nothing matched.
    NotFound,
}

impl Verdict {
    /// The verdict for a filesystem entry: found unless nothing is there.
    #[must_use]
    pub fn for_file(path: &Path, classification: Classification) -> Self {
        if classification.exists() {
            Self::Found(Target::File {
                path: path.to_path_buf(),
                classification,
            })
        } else {
            Self::NotFound
        }
    }
}

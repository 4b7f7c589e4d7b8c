//! Symlink chain resolution.
//!
//! Chains are followed one hop at a time so every hop can be reported.
//! Loops are detected with a visited set instead of a depth limit.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::classify::{classify, Classification};

/// One hop of a symlink chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymlinkHop {
    /// The link that was followed.
    pub from: PathBuf,
    /// Where the link points, relative targets joined onto the link's
    /// parent directory.
    pub to: PathBuf,
}

/// The result of following a path through all of its symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkChain {
    /// Hops in the order they were followed.
    pub hops: Vec<SymlinkHop>,
    /// The path the chain stopped at.
    ///
    /// For a broken chain this is the last link, for a loop it is the link
    /// that was reached a second time.
    pub terminal: PathBuf,
    /// Classification of `terminal`.
    pub classification: Classification,
    /// Whether the chain stopped because it looped.
    pub cycle: bool,
}

/// Follow `path` through its symlinks until a non-link is reached.
///
/// - A path that is not a link yields an empty chain and its own
///   classification.
/// - A chain ending at a missing path yields [`Classification::BrokenSymlink`]
///   for the last link.
/// - A chain that reaches a link it already followed stops there. The hop
///   that closed the loop is kept and the classification is the
///   [`Classification::Symlink`] observed at the repeated link.
///
/// # Examples
///
/// ```
/// use origin::path::{resolve_symlink_chain, Classification};
/// use std::path::Path;
///
/// let chain = resolve_symlink_chain(Path::new("/"));
/// assert!(chain.hops.is_empty());
/// assert_eq!(chain.classification, Classification::Directory);
/// ```
#[must_use]
pub fn resolve_symlink_chain(path: &Path) -> SymlinkChain {
    let mut hops: Vec<SymlinkHop> = Vec::new();
    let mut visited = HashSet::new();
    let mut current = path.to_path_buf();

    loop {
        match classify(&current) {
            Classification::Symlink(target) => {
                if !visited.insert(link_identity(&current)) {
                    log::debug!("symlink cycle detected at '{}'", current.display());
                    return SymlinkChain {
                        hops,
                        terminal: current,
                        classification: Classification::Symlink(target),
                        cycle: true,
                    };
                }
                let next = follow(&current, &target);
                hops.push(SymlinkHop {
                    from: current,
                    to: next.clone(),
                });
                current = next;
            }
            Classification::Missing => {
                return match hops.last() {
                    Some(last) => SymlinkChain {
                        terminal: last.from.clone(),
                        hops,
                        classification: Classification::BrokenSymlink,
                        cycle: false,
                    },
                    None => SymlinkChain {
                        hops,
                        terminal: current,
                        classification: Classification::Missing,
                        cycle: false,
                    },
                };
            }
            other => {
                return SymlinkChain {
                    hops,
                    terminal: current,
                    classification: other,
                    cycle: false,
                };
            }
        }
    }
}

/// Where a link with the given raw target points.
pub(crate) fn follow(link: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        return target.to_path_buf();
    }
    match link.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(target),
        _ => target.to_path_buf(),
    }
}

/// A key identifying the link itself, independent of how it was spelled.
///
/// Only the parent directory is canonicalized so the link is not followed.
fn link_identity(link: &Path) -> PathBuf {
    let lexical = || link.components().collect::<PathBuf>();
    let Some(name) = link.file_name() else {
        return lexical();
    };
    let parent = match link.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).map_or_else(|_| lexical(), |dir| dir.join(name))
}

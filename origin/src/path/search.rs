//! Search-path lookup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The first search directory that contains an entry with the wanted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathHit {
    /// The directory from the search path, as listed.
    pub directory: PathBuf,
    /// `directory` joined with the name.
    pub candidate: PathBuf,
}

/// Find the first directory in `directories` containing an entry `name`.
///
/// The entry may be of any type, including a dangling symlink; judging it
/// is left to the caller. Directories that do not exist, are not
/// directories, or cannot be inspected are skipped. An empty element stands
/// for the current directory, as it does in a shell's `PATH`.
///
/// # Examples
///
/// ```
/// use origin::path::search;
/// use std::path::PathBuf;
///
/// let dirs = vec![PathBuf::from("/definitely/not/a/dir")];
/// assert!(search("ls", &dirs).is_none());
/// ```
#[must_use]
pub fn search(name: &str, directories: &[PathBuf]) -> Option<PathHit> {
    if name.is_empty() {
        return None;
    }

    directories.iter().find_map(|directory| {
        let dir = if directory.as_os_str().is_empty() {
            Path::new(".")
        } else {
            directory.as_path()
        };

        match fs::metadata(dir) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                log::debug!("skipping '{}': not a directory", dir.display());
                return None;
            }
            Err(e) => {
                log::debug!("skipping '{}': {e}", dir.display());
                return None;
            }
        }

        let candidate = dir.join(name);
        match fs::symlink_metadata(&candidate) {
            Ok(_) => Some(PathHit {
                directory: directory.clone(),
                candidate,
            }),
            Err(_) => None,
        }
    })
}

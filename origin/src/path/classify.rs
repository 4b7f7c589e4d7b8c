//! Single-path classification.
//!
//! [`classify`] looks at exactly one filesystem entry and never follows a
//! symlink; following chains is the job of [`super::symlink`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What kind of filesystem entry a path names.
///
/// # Examples
///
/// ```
/// use origin::path::Classification;
/// use std::path::PathBuf;
///
/// assert!(Classification::Executable.exists());
/// assert!(Classification::Symlink(PathBuf::from("dash")).is_symlink());
/// assert!(!Classification::Missing.exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Classification {
    /// A regular file the effective user may execute.
    Executable,
    /// A regular file without execute permission for the effective user.
    RegularFile,
    /// A directory.
    Directory,
    /// A symbolic link; carries the immediate, unresolved link target.
    Symlink(PathBuf),
    /// Nothing exists at the path.
    Missing,
    /// A symbolic link chain that ends at a path that does not exist.
    BrokenSymlink,
    /// A device, fifo, socket or other non-regular entry.
    Special,
}

impl Classification {
    /// Whether something exists at the classified path.
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Whether this is an unresolved symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        matches!(self, Self::Symlink(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executable => write!(f, "executable"),
            Self::RegularFile => write!(f, "regular file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink(target) => write!(f, "symlink to {}", target.display()),
            Self::Missing => write!(f, "missing"),
            Self::BrokenSymlink => write!(f, "broken symlink"),
            Self::Special => write!(f, "special file"),
        }
    }
}

/// Classify the entry at `path` without following symlinks.
///
/// Entries that cannot be inspected (for example because a parent directory
/// is not searchable) are reported as [`Classification::Missing`].
///
/// # Examples
///
/// ```
/// use origin::path::{classify, Classification};
/// use std::path::Path;
///
/// assert_eq!(classify(Path::new("/")), Classification::Directory);
/// assert_eq!(
///     classify(Path::new("/definitely/not/here")),
///     Classification::Missing
/// );
/// ```
#[must_use]
pub fn classify(path: &Path) -> Classification {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("cannot inspect '{}': {e}", path.display());
            return Classification::Missing;
        }
    };

    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        return match fs::read_link(path) {
            Ok(target) => Classification::Symlink(target),
            Err(e) => {
                log::debug!("cannot read link '{}': {e}", path.display());
                Classification::Missing
            }
        };
    }
    if file_type.is_dir() {
        return Classification::Directory;
    }
    if !file_type.is_file() {
        return Classification::Special;
    }
    if is_executable(&metadata) {
        Classification::Executable
    } else {
        Classification::RegularFile
    }
}

/// Whether the effective user may execute a regular file with this metadata.
///
/// The permission class is picked the way the kernel picks it: owner bits
/// for the owner, group bits for members of the file's group, other bits
/// for everyone else. Root may execute anything with at least one execute
/// bit set.
#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use nix::unistd::{getegid, geteuid};
    use std::os::unix::fs::MetadataExt;

    let mode = metadata.mode();
    let euid = geteuid();
    if euid.is_root() {
        return mode & 0o111 != 0;
    }
    if metadata.uid() == euid.as_raw() {
        return mode & 0o100 != 0;
    }
    let gid = metadata.gid();
    if getegid().as_raw() == gid || supplementary_groups().contains(&gid) {
        return mode & 0o010 != 0;
    }
    mode & 0o001 != 0
}

#[cfg(all(unix, not(target_vendor = "apple")))]
fn supplementary_groups() -> Vec<u32> {
    nix::unistd::getgroups()
        .map(|groups| groups.into_iter().map(|g| g.as_raw()).collect())
        .unwrap_or_default()
}

// Apple platforms keep group membership in opendirectoryd, not getgroups(2).
#[cfg(target_vendor = "apple")]
fn supplementary_groups() -> Vec<u32> {
    Vec::new()
}

#[cfg(not(unix))]
fn is_executable(metadata: &fs::Metadata) -> bool {
    metadata.is_file()
}

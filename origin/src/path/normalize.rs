//! Home-directory expansion for configured paths.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// Only `~` and `~/path` are supported. Paths without a leading tilde are
/// returned unchanged.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the path
/// uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use origin::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/.origin/tables.yaml")).unwrap();
/// assert!(expanded.ends_with(".origin/tables.yaml"));
///
/// let expanded = expand_tilde(Path::new("/bin/bash")).unwrap();
/// assert_eq!(expanded, Path::new("/bin/bash"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: path_str.to_string(),
        message: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(Error::Validation {
            field: path_str.to_string(),
            message: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

//! Loading shell tables from a YAML snapshot instead of a live shell.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::context::ShellContext;
use super::BuiltinKind;
use crate::{Error, Result};

/// On-disk form of a table snapshot.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    #[serde(default)]
    shell: Option<PathBuf>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    builtins: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    functions: BTreeMap<String, String>,
}

impl ShellContext {
    /// Parse a YAML table snapshot.
    ///
    /// `default_shell` is used when the snapshot does not name its shell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or has
    /// unknown fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use origin::shell::{ShellContext, ShellTables};
    /// use std::path::Path;
    ///
    /// let yaml = "aliases:\n  ll: ls -alF\nbuiltins: [type]\n";
    /// let tables = ShellContext::from_yaml_str(yaml, Path::new("/bin/bash")).unwrap();
    /// assert_eq!(tables.lookup_alias("ll").unwrap().definition, "ls -alF");
    /// assert_eq!(tables.shell_path(), Path::new("/bin/bash"));
    /// ```
    pub fn from_yaml_str(yaml: &str, default_shell: &Path) -> Result<Self> {
        // An empty document deserializes to unit, not to a struct.
        let file: TablesFile = if yaml.trim().is_empty() {
            TablesFile::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        let mut context =
            Self::new(file.shell.unwrap_or_else(|| default_shell.to_path_buf()));
        for (name, definition) in file.aliases {
            context.insert_alias(name, definition);
        }
        for name in file.builtins {
            context.insert_builtin(name, BuiltinKind::Builtin);
        }
        for name in file.keywords {
            context.insert_builtin(name, BuiltinKind::Keyword);
        }
        for (name, body) in file.functions {
            context.insert_function(name, body);
        }
        Ok(context)
    }

    /// Load a YAML table snapshot from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationFile`] if the file cannot be read and
    /// [`Error::Configuration`] if it cannot be parsed.
    pub fn load(path: &Path, default_shell: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigurationFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading shell tables from '{}'", path.display());
        Self::from_yaml_str(&contents, default_shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellTables;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"
shell: /bin/bash
aliases:
  ll: ls -alF
  ls: ls -l
builtins: [type, cd, "."]
keywords: [if, then]
functions:
  afunction: "afunction () \n{ \n    echo \"I am a function\"\n}"
"#;

    #[test]
    fn test_full_snapshot() {
        let tables = ShellContext::from_yaml_str(SNAPSHOT, Path::new("/bin/zsh")).unwrap();

        assert_eq!(tables.shell_path(), Path::new("/bin/bash"));
        assert_eq!(tables.lookup_alias("ll").unwrap().definition, "ls -alF");
        assert_eq!(tables.lookup_builtin(".").unwrap().kind, BuiltinKind::Builtin);
        assert_eq!(tables.lookup_builtin("if").unwrap().kind, BuiltinKind::Keyword);
        assert_eq!(
            tables.lookup_function("afunction").unwrap().body,
            "afunction () \n{ \n    echo \"I am a function\"\n}"
        );
    }

    #[test]
    fn test_empty_snapshot_uses_default_shell() {
        let tables = ShellContext::from_yaml_str("", Path::new("/bin/zsh")).unwrap();
        assert_eq!(tables.shell_path(), Path::new("/bin/zsh"));
        assert_eq!(tables.alias_count(), 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ShellContext::from_yaml_str("variables: {}\n", Path::new("/bin/bash"))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tables.yaml");
        fs::write(&path, SNAPSHOT).unwrap();

        let tables = ShellContext::load(&path, Path::new("/bin/sh")).unwrap();
        assert_eq!(tables.alias_count(), 2);
        assert_eq!(tables.function_count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellContext::load(Path::new("/nonexistent/tables.yaml"), Path::new("/bin/bash"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigurationFile { .. }));
    }
}

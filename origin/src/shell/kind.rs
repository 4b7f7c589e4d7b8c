//! Shell dialect detection and the introspection script for each dialect.

use std::path::Path;

use crate::{Error, Result};

/// Marker line printed before each section of introspection output.
pub(crate) const SECTION_MARKER: &str = "@@origin-section@@";

/// Shell dialects whose tables can be introspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
}

impl ShellKind {
    /// Detect the dialect from a shell's path.
    ///
    /// Only the file name is inspected, so `/usr/local/bin/bash` and
    /// `/bin/bash5` are both bash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShell`] for any other shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use origin::shell::ShellKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(ShellKind::detect(Path::new("/bin/bash")).unwrap(), ShellKind::Bash);
    /// assert_eq!(ShellKind::detect(Path::new("zsh")).unwrap(), ShellKind::Zsh);
    /// assert!(ShellKind::detect(Path::new("/usr/bin/fish")).is_err());
    /// ```
    pub fn detect(shell: &Path) -> Result<Self> {
        let name = shell
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if name.starts_with("bash") {
            Ok(Self::Bash)
        } else if name.starts_with("zsh") {
            Ok(Self::Zsh)
        } else {
            Err(Error::UnsupportedShell {
                shell: shell.to_path_buf(),
            })
        }
    }

    /// The shell's own name for itself.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
        }
    }

    /// Script that prints the alias, builtin, keyword and function tables,
    /// each preceded by a marker line naming the section.
    #[must_use]
    pub fn script(&self) -> String {
        let section = |name: &str| format!("printf '%s\\n' '{SECTION_MARKER} {name}'");
        let (aliases, builtins, keywords, functions) = match self {
            Self::Bash => ("alias -p", "compgen -b", "compgen -k", "declare -f"),
            Self::Zsh => (
                "alias -L",
                "print -rl -- ${(k)builtins}",
                "print -rl -- ${(k)reswords}",
                "functions",
            ),
        };
        [
            section("aliases"),
            aliases.to_string(),
            section("builtins"),
            builtins.to_string(),
            section("keywords"),
            keywords.to_string(),
            section("functions"),
            functions.to_string(),
        ]
        .join("; ")
    }
}

//! Asking a live shell for its tables.
//!
//! The shell is started interactively (`-ic`) so that its startup files run
//! and the aliases and functions a user would see at the prompt are defined.
//! Its output is split into sections by marker lines and each section is
//! parsed with the rules below.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::kind::{ShellKind, SECTION_MARKER};
use super::{BuiltinKind, ShellContext};
use crate::words;
use crate::{Error, Result};

/// Builds a [`ShellContext`] by running a shell.
#[derive(Debug, Clone)]
pub struct Introspector {
    shell: PathBuf,
    kind: ShellKind,
}

impl Introspector {
    /// Prepare to introspect `shell`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShell`] if the dialect is not known.
    pub fn new(shell: &Path) -> Result<Self> {
        Ok(Self {
            shell: shell.to_path_buf(),
            kind: ShellKind::detect(shell)?,
        })
    }

    /// The detected dialect.
    #[must_use]
    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    /// Run the shell and parse its tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Introspection`] if the shell cannot be started or
    /// exits unsuccessfully.
    pub fn introspect(&self) -> Result<ShellContext> {
        log::debug!(
            "introspecting {} shell '{}'",
            self.kind.name(),
            self.shell.display()
        );
        let output = Command::new(&self.shell)
            .arg("-ic")
            .arg(self.kind.script())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::Introspection {
                shell: self.shell.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::Introspection {
                shell: self.shell.clone(),
                reason: format!("shell exited with {}", output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let context = parse_output(&self.shell, &stdout);
        log::debug!(
            "found {} aliases, {} builtins, {} functions",
            context.alias_count(),
            context.builtin_count(),
            context.function_count()
        );
        Ok(context)
    }
}

/// Parse sectioned introspection output into tables for `shell`.
///
/// Lines before the first marker (startup-file chatter) are ignored.
#[must_use]
pub fn parse_output(shell: &Path, output: &str) -> ShellContext {
    let mut context = ShellContext::new(shell);
    let mut section: Option<&str> = None;
    let mut function_lines = Vec::new();

    for line in output.lines() {
        if let Some(name) = line.strip_prefix(SECTION_MARKER) {
            section = Some(name.trim());
            continue;
        }
        match section {
            Some("aliases") => {
                if let Some((name, definition)) = parse_alias_line(line) {
                    context.insert_alias(name, definition);
                }
            }
            Some("builtins") => insert_names(&mut context, line, BuiltinKind::Builtin),
            Some("keywords") => insert_names(&mut context, line, BuiltinKind::Keyword),
            Some("functions") => function_lines.push(line),
            _ => {}
        }
    }

    for (name, body) in parse_functions(&function_lines) {
        context.insert_function(name, body);
    }
    context
}

fn insert_names(context: &mut ShellContext, line: &str, kind: BuiltinKind) {
    for name in line.split_whitespace() {
        context.insert_builtin(name, kind);
    }
}

/// Parse one `alias name='body'` line as printed by `alias -p` or `alias -L`.
///
/// Global aliases are kept; suffix aliases never apply to a command word and
/// are dropped.
///
/// # Examples
///
/// ```
/// use origin::shell::introspect::parse_alias_line;
///
/// assert_eq!(
///     parse_alias_line("alias ll='ls -alF'"),
///     Some(("ll".to_string(), "ls -alF".to_string()))
/// );
/// assert_eq!(parse_alias_line("not an alias"), None);
/// ```
#[must_use]
pub fn parse_alias_line(line: &str) -> Option<(String, String)> {
    let mut rest = line.strip_prefix("alias ")?.trim_start();
    loop {
        if let Some(after) = rest.strip_prefix("-- ") {
            rest = after.trim_start();
        } else if rest.starts_with("-s ") {
            return None;
        } else if let Some(after) = rest.strip_prefix("-g ") {
            rest = after.trim_start();
        } else {
            break;
        }
    }

    let (name, value) = rest.split_once('=')?;
    let name = words::unquote(name);
    if name.is_empty() {
        return None;
    }
    Some((name, words::unquote(value)))
}

/// Split `declare -f` / `functions` output into `(name, definition)` pairs.
///
/// A definition starts at an unindented `name ()` header and ends at the
/// next unindented `}` outside a here-document. The definition text includes
/// both lines.
#[must_use]
pub fn parse_functions(lines: &[&str]) -> Vec<(String, String)> {
    let mut functions = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    // Terminators of the here-documents still open, oldest first.
    let mut heredocs: VecDeque<String> = VecDeque::new();

    for &line in lines {
        match current.as_mut() {
            None => {
                if let Some(name) = function_header(line) {
                    current = Some((name, vec![line]));
                }
            }
            Some((_, body)) => {
                body.push(line);
                if let Some(delimiter) = heredocs.front() {
                    if line.trim_start_matches('\t') == delimiter.as_str() {
                        heredocs.pop_front();
                    }
                } else if line.trim_end() == "}" {
                    if let Some((name, body)) = current.take() {
                        functions.push((name, body.join("\n")));
                    }
                } else {
                    heredocs.extend(heredoc_delimiters(line));
                }
            }
        }
    }
    functions
}

/// Terminators of the here-documents opened on `line`, in order.
fn heredoc_delimiters(line: &str) -> Vec<String> {
    let mut delimiters = Vec::new();
    let mut rest = line;
    while let Some(i) = rest.find("<<") {
        rest = &rest[i + 2..];
        if let Some(here_string) = rest.strip_prefix('<') {
            rest = here_string;
            continue;
        }
        let word = rest.strip_prefix('-').unwrap_or(rest).trim_start();
        let end = word
            .find(|c: char| c.is_whitespace() || ";&|<>()".contains(c))
            .unwrap_or(word.len());
        let delimiter: String = word[..end]
            .chars()
            .filter(|c| !matches!(c, '\'' | '"' | '\\'))
            .collect();
        // `1<<2` is a shift, not a here-document.
        if delimiter.starts_with(|c: char| !c.is_ascii_digit()) {
            delimiters.push(delimiter);
        }
        rest = &word[end..];
    }
    delimiters
}

fn function_header(line: &str) -> Option<String> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim_end();
    let head = line.strip_suffix('{').map_or(line, str::trim_end);
    let name = head.strip_suffix("()")?.trim_end();
    let name = name.strip_prefix("function ").unwrap_or(name).trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(name.to_string())
}

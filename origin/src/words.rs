//! Shell word splitting.
//!
//! Quote removal is left to [`shell_words`]. On top of it this module finds
//! the command word of an alias body and undoes the quoting shells apply
//! when they print alias definitions. No expansions are performed.

const OPERATOR_CHARS: &[char] = &[';', '&', '|', '<', '>', '(', ')'];

/// Split `input` into words with quoting removed.
///
/// Input `shell_words` rejects (an unterminated quote, say) falls back to
/// plain whitespace splitting.
fn split(input: &str) -> Vec<String> {
    shell_words::split(input).unwrap_or_else(|e| {
        log::debug!("cannot split '{input}': {e}");
        input.split_whitespace().map(str::to_string).collect()
    })
}

/// Whether a word is a `NAME=value` variable assignment.
fn is_assignment(word: &str) -> bool {
    let Some((name, _)) = word.split_once('=') else {
        return false;
    };
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The word a shell would run as the command in `line`.
///
/// Leading variable assignments are skipped. Returns `None` if the line has
/// no command word before its first operator.
///
/// # Examples
///
/// ```
/// use origin::words::command_word;
///
/// assert_eq!(command_word("ls -alF").as_deref(), Some("ls"));
/// assert_eq!(command_word("LC_ALL=C sort -u").as_deref(), Some("sort"));
/// assert_eq!(command_word("'my tool' --flag").as_deref(), Some("my tool"));
/// assert_eq!(command_word("FOO=bar").as_deref(), None);
/// ```
#[must_use]
pub fn command_word(line: &str) -> Option<String> {
    for word in split(line) {
        // An operator glued to a word ends the command there.
        let (head, cut) = match word.find(OPERATOR_CHARS) {
            Some(i) => (&word[..i], true),
            None => (word.as_str(), false),
        };
        if !head.is_empty() && !is_assignment(head) {
            return Some(head.to_string());
        }
        if cut {
            return None;
        }
    }
    None
}

/// Undo shell quoting on a single printed value, e.g. `'ls -alF'`.
///
/// Several words are joined with single spaces.
///
/// # Examples
///
/// ```
/// use origin::words::unquote;
///
/// assert_eq!(unquote("'ls -alF'"), "ls -alF");
/// assert_eq!(unquote(r"'it'\''s'"), "it's");
/// ```
#[must_use]
pub fn unquote(value: &str) -> String {
    split(value).join(" ")
}

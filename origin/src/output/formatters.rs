//! Output formatter implementations.

use std::path::Path;

use crate::path::Classification;
use crate::resolve::{Resolution, ResolutionStep, Verdict};
use crate::Result;

use super::OutputFormatter;

/// Indentation applied to each line of a function body.
const BODY_INDENT: &str = "    ";

/// Lines for one step of the trace.
fn step_lines(step: &ResolutionStep) -> Vec<String> {
    match step {
        ResolutionStep::AliasExpansion(alias) => vec![format!(
            "'{}' is an alias for '{}' in shell '{}': '{}'",
            alias.from,
            alias.to,
            alias.shell.display(),
            alias.definition
        )],
        ResolutionStep::Builtin { name, shell, .. } => {
            vec![format!("'{name}' is built into shell '{}'", shell.display())]
        }
        ResolutionStep::Function { name, shell, body } => {
            let mut lines = vec![format!(
                "'{name}' is a function in shell '{}':",
                shell.display()
            )];
            lines.extend(body.lines().map(|line| format!("{BODY_INDENT}{line}")));
            lines
        }
        ResolutionStep::PathHit {
            name,
            resolved_path,
            ..
        } => vec![format!(
            "'{name}' found in PATH as '{}'",
            resolved_path.display()
        )],
        ResolutionStep::SymlinkHop { from, to, cycle } => {
            let suffix = if *cycle { " (cycle detected)" } else { "" };
            vec![format!(
                "'{}' is a symlink to {}{suffix}",
                from.display(),
                to.display()
            )]
        }
        ResolutionStep::FileClassification { path, kind } => vec![classification_line(path, kind)],
    }
}

fn classification_line(path: &Path, kind: &Classification) -> String {
    let path = path.display();
    match kind {
        Classification::Executable => format!("'{path}' is an executable"),
        Classification::RegularFile => format!("'{path}' is a regular file"),
        Classification::Directory => format!("'{path}' is a directory"),
        Classification::Symlink(target) => {
            format!("'{path}' is a symlink to {}", target.display())
        }
        Classification::Missing => format!("'{path}' does not exist"),
        Classification::BrokenSymlink => format!("'{path}' is a broken symlink"),
        Classification::Special => format!("'{path}' is a special file"),
    }
}

fn no_match_line(token: &str) -> String {
    format!("no match for '{token}'")
}

/// Formatter for the full human-readable trace.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        let mut lines: Vec<String> = resolution.steps.iter().flat_map(step_lines).collect();
        if resolution.verdict == Verdict::NotFound {
            lines.push(no_match_line(&resolution.token));
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter that prints only the outcome.
pub struct TerseFormatter;

impl OutputFormatter for TerseFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        if resolution.verdict == Verdict::NotFound {
            return Ok(no_match_line(&resolution.token));
        }
        Ok(resolution
            .steps
            .last()
            .map(|step| step_lines(step).join("\n"))
            .unwrap_or_default())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        Ok(serde_json::to_string_pretty(resolution)?)
    }
}

//! Version-declaration file access
//!
//! The module's `__init__.py` is the sole source of truth for the current
//! version: one line assigning `__version__`. Reads scan for the assignment
//! prefix; writes replace the line in place, preserving the file's existing
//! quote style. The version string itself is opaque text, not validated.

use crate::core::error::{CuratorResult, ResultExt};
use std::path::Path;

/// Recognized assignment prefix
const VERSION_PREFIX: &str = "__version__";

/// Read the version string from a version-declaration file
///
/// Returns `None` when no recognized assignment line exists.
pub fn read_version(file: &Path) -> CuratorResult<Option<String>> {
  let text = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

  Ok(text.lines().find_map(parse_assignment))
}

/// Overwrite the version assignment line with a new version
///
/// Every recognized assignment line is rewritten; the rest of the file is
/// untouched.
pub fn write_version(file: &Path, version: &str) -> CuratorResult<()> {
  let text = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

  let lines: Vec<String> = text
    .lines()
    .map(|line| {
      if line.trim_start().starts_with(VERSION_PREFIX) {
        let quote = detect_quote(line);
        format!("{} = {}{}{}", VERSION_PREFIX, quote, version, quote)
      } else {
        line.to_string()
      }
    })
    .collect();

  std::fs::write(file, lines.join("\n") + "\n").with_context(|| format!("Failed to write {}", file.display()))?;

  Ok(())
}

/// Parse a `__version__ = '...'` line into the unquoted version string
fn parse_assignment(line: &str) -> Option<String> {
  let trimmed = line.trim_start();
  if !trimmed.starts_with(VERSION_PREFIX) {
    return None;
  }

  let (_, value) = trimmed.split_once('=')?;
  let value = value.trim().trim_matches(|c| c == '\'' || c == '"');

  if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Quote character used by the existing assignment, defaulting to double
fn detect_quote(line: &str) -> char {
  line
    .split_once('=')
    .map(|(_, value)| value.trim())
    .and_then(|v| v.chars().next())
    .filter(|c| *c == '\'' || *c == '"')
    .unwrap_or('"')
}

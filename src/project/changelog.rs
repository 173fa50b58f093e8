//! Changelog updates for release branches
//!
//! Each release appends a dated section to CHANGELOG.md at the repository
//! root. A missing changelog is a warning and a no-op, not an error: the
//! release proceeds without it.

use crate::core::error::{CuratorResult, ResultExt};
use chrono::Utc;
use std::path::Path;

/// Name of the changelog file at the repository root
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Append a release section to the changelog
///
/// Returns whether an entry was written; `false` means the file was absent.
pub fn append_entry(root: &Path, version: &str, description: &str) -> CuratorResult<bool> {
  let path = root.join(CHANGELOG_FILE);
  if !path.is_file() {
    eprintln!("⚠️  No {} found at {}", CHANGELOG_FILE, root.display());
    return Ok(false);
  }

  let date = Utc::now().format("%Y-%m-%d").to_string();
  let mut text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
  text.push_str(&render_entry(version, description, &date));

  std::fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;

  Ok(true)
}

/// Render one changelog section
fn render_entry(version: &str, description: &str, date: &str) -> String {
  format!("\n## {} - {}\n\n- {}\n", version, date, description)
}

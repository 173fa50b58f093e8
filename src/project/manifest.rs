//! Read-only pyproject.toml parsing
//!
//! The manifest is consulted for exactly three things: the configured source
//! root, the version-attribute dotted path, and the fallback project name.
//! A missing or malformed manifest is a warning, never a hard failure, so
//! discovery can still fall through to filesystem heuristics.

use std::path::Path;
use toml_edit::{DocumentMut, Item};

/// Name of the project manifest file
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Parsed project manifest
pub struct Manifest {
  doc: DocumentMut,
}

impl Manifest {
  /// Load the manifest from a repository root
  ///
  /// Returns `None` (with a diagnostic) when the file is absent or does not
  /// parse; the caller falls back to name-convention discovery.
  pub fn load(root: &Path) -> Option<Self> {
    let path = root.join(MANIFEST_FILE);
    let text = match std::fs::read_to_string(&path) {
      Ok(text) => text,
      Err(_) => {
        eprintln!("⚠️  No {} found at {}", MANIFEST_FILE, root.display());
        return None;
      }
    };

    match text.parse::<DocumentMut>() {
      Ok(doc) => Some(Self { doc }),
      Err(e) => {
        eprintln!("⚠️  Malformed {}: {}", MANIFEST_FILE, e);
        None
      }
    }
  }

  /// Parse manifest text directly (used by tests)
  #[cfg(test)]
  pub fn parse(text: &str) -> Option<Self> {
    text.parse::<DocumentMut>().ok().map(|doc| Self { doc })
  }

  /// Configured source-root directory (`tool.setuptools.packages.find.where`)
  pub fn source_root(&self) -> Option<String> {
    self
      .get(&["tool", "setuptools", "packages", "find", "where"])?
      .as_array()?
      .get(0)?
      .as_str()
      .map(str::to_string)
  }

  /// Version-attribute dotted path (`tool.setuptools.dynamic.version.attr`)
  pub fn version_attr(&self) -> Option<String> {
    let version = self.get(&["tool", "setuptools", "dynamic", "version"])?;

    version
      .as_table_like()
      .and_then(|t| t.get("attr"))
      .and_then(Item::as_str)
      .map(str::to_string)
  }

  /// Declared project name (`project.name`)
  pub fn project_name(&self) -> Option<String> {
    self.get(&["project", "name"])?.as_str().map(str::to_string)
  }

  /// Walk a dotted key path through tables and inline tables
  fn get(&self, path: &[&str]) -> Option<&Item> {
    let mut item = self.doc.get(path[0])?;
    for key in &path[1..] {
      item = item.as_table_like()?.get(key)?;
    }
    Some(item)
  }
}

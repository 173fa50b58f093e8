//! Project layout introspection for src-layout projects
//!
//! A project carries exactly one version-bearing module: a directory under
//! the source root whose `__init__.py` assigns `__version__`. Discovery runs
//! an ordered list of resolution strategies against the manifest
//! (pyproject.toml) and the filesystem; the first success wins, every failure
//! degrades to a warning so a sparse manifest still resolves.

pub mod changelog;
pub mod manifest;
pub mod version;

pub use manifest::Manifest;

use std::path::{Path, PathBuf};

/// Name of the version-declaration file inside a module directory
pub const VERSION_FILE: &str = "__init__.py";

/// Default source root when the manifest does not declare one
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// The discovered version-bearing module
///
/// Invariant: exactly one version-declaration file per descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
  /// Module directory (absolute)
  pub path: PathBuf,
}

impl ModuleDescriptor {
  /// The module's version-declaration file
  pub fn version_file(&self) -> PathBuf {
    self.path.join(VERSION_FILE)
  }
}

/// Locate the version-bearing module under a repository root
///
/// Strategies, in order:
/// 1. Manifest version-attribute dotted path, resolved under the source root
/// 2. Name-derived guess from the manifest project name
/// 3. Filesystem walk: first child of the source root, descending one level
///    through a namespace directory without a version file of its own
///
/// Returns `None` (after warning) when every strategy fails; callers must
/// check for absence. Recomputed on every call, never cached.
pub fn discover(root: &Path) -> Option<ModuleDescriptor> {
  let manifest = Manifest::load(root);

  let source_root = manifest
    .as_ref()
    .and_then(Manifest::source_root)
    .unwrap_or_else(|| DEFAULT_SOURCE_ROOT.to_string());
  let source_path = root.join(&source_root);

  if !source_path.is_dir() {
    eprintln!("⚠️  No source directory found at {}", source_path.display());
    return None;
  }

  if let Some(manifest) = &manifest {
    if let Some(module) = resolve_version_attr(&source_path, manifest) {
      return Some(module);
    }
    if let Some(module) = resolve_project_name(&source_path, manifest) {
      return Some(module);
    }
  }

  resolve_by_walk(&source_path)
}

/// Strategy 1: the manifest's declared version-attribute dotted path
///
/// `a.b.__version__` names the attribute inside module `a/b`; the final
/// segment is the attribute itself, not a directory.
fn resolve_version_attr(source_path: &Path, manifest: &Manifest) -> Option<ModuleDescriptor> {
  let attr = manifest.version_attr()?;

  let segments: Vec<&str> = attr.split('.').collect();
  let dirs = match segments.as_slice() {
    [dirs @ .., "__version__"] if !dirs.is_empty() => dirs,
    _ => {
      eprintln!("⚠️  Unrecognized version attribute in manifest: {}", attr);
      return None;
    }
  };

  let mut path = source_path.to_path_buf();
  for dir in dirs {
    path.push(dir);
  }

  validate_module(&path, &format!("version attribute '{}'", attr))
}

/// Strategy 2: guess the module directory from the declared project name
fn resolve_project_name(source_path: &Path, manifest: &Manifest) -> Option<ModuleDescriptor> {
  let name = manifest.project_name()?;
  let normalized = name.to_lowercase().replace('-', "_");

  validate_module(&source_path.join(&normalized), &format!("project name '{}'", name))
}

/// Strategy 3: first directory under the source root, descending one level
/// through a namespace package
fn resolve_by_walk(source_path: &Path) -> Option<ModuleDescriptor> {
  let first_child = first_dir(source_path)?;

  if first_child.join(VERSION_FILE).is_file() {
    return Some(ModuleDescriptor { path: first_child });
  }

  // A namespace directory has no __init__.py; its first child is the module
  let module = first_dir(&first_child)?;
  if module.join(VERSION_FILE).is_file() {
    return Some(ModuleDescriptor { path: module });
  }

  eprintln!("⚠️  No {} found in module at {}", VERSION_FILE, module.display());
  None
}

/// Check a candidate directory holds a version-declaration file
fn validate_module(path: &Path, origin: &str) -> Option<ModuleDescriptor> {
  if path.join(VERSION_FILE).is_file() {
    Some(ModuleDescriptor { path: path.to_path_buf() })
  } else {
    eprintln!("⚠️  Manifest {} does not match a module at {}", origin, path.display());
    None
  }
}

/// First subdirectory of a path, in name order for determinism
fn first_dir(path: &Path) -> Option<PathBuf> {
  let mut dirs: Vec<PathBuf> = std::fs::read_dir(path)
    .ok()?
    .filter_map(|e| e.ok())
    .map(|e| e.path())
    .filter(|p| p.is_dir())
    .collect();
  dirs.sort();

  if dirs.is_empty() {
    eprintln!("⚠️  No module directory found under {}", path.display());
  }
  dirs.into_iter().next()
}

//! Read-only release status view
//!
//! The same view backs `curator status` and the refresh printed after every
//! mutating command: working-copy root, repo description, branches with the
//! active one marked, tags, and the discovered module plus its version.

use serde::Serialize;
use std::env;
use std::path::PathBuf;

use crate::core::curator::ReleaseCurator;
use crate::core::error::CuratorResult;
use crate::core::vcs::SystemGit;

/// One branch in the status view
#[derive(Debug, Clone, Serialize)]
pub struct BranchStatus {
  /// Branch name
  pub name: String,

  /// Whether this is the active branch
  pub active: bool,
}

/// Snapshot of the repository's release-relevant state
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
  /// Working tree root
  pub root: PathBuf,

  /// Repository description, if one was written
  pub description: Option<String>,

  /// Active branch name
  pub active_branch: String,

  /// All local branches
  pub branches: Vec<BranchStatus>,

  /// All tags
  pub tags: Vec<String>,

  /// Discovered version-bearing module, relative to the root
  pub module: Option<PathBuf>,

  /// Current version string from the module's version file
  pub version: Option<String>,
}

impl StatusView {
  /// Collect the view from a curator
  pub fn collect(curator: &ReleaseCurator<SystemGit>) -> CuratorResult<Self> {
    let branches: Vec<BranchStatus> = curator
      .branches()?
      .into_iter()
      .map(|(name, active)| BranchStatus { name, active })
      .collect();

    let active_branch = branches
      .iter()
      .find(|b| b.active)
      .map(|b| b.name.clone())
      .unwrap_or_else(|| "HEAD".to_string());

    let module = curator
      .discover_module()
      .map(|m| m.path.strip_prefix(curator.root()).map(|p| p.to_path_buf()).unwrap_or(m.path));

    Ok(Self {
      root: curator.root().to_path_buf(),
      description: curator.git().description(),
      active_branch,
      branches,
      tags: curator.tags()?,
      module,
      version: curator.current_version(),
    })
  }
}

/// Run the status command
pub fn run_status(json: bool) -> CuratorResult<()> {
  let curator = ReleaseCurator::open(&env::current_dir()?)?;
  let view = StatusView::collect(&curator)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&view)?);
  } else {
    print_view(&view);
  }

  Ok(())
}

/// Print the refreshed status view after a mutating command
pub fn print_refreshed(curator: &ReleaseCurator<SystemGit>) -> CuratorResult<()> {
  print_view(&StatusView::collect(curator)?);
  Ok(())
}

/// Print the status view as the terminal dashboard
fn print_view(view: &StatusView) {
  println!("\n📦 Release Status\n");

  println!("  {:<10} {}", "root:", view.root.display());
  if let Some(desc) = &view.description {
    println!("  {:<10} {}", "desc:", desc);
  }

  let branches = view
    .branches
    .iter()
    .map(|b| if b.active { format!("{}*", b.name) } else { b.name.clone() })
    .collect::<Vec<_>>()
    .join(", ");
  println!("  {:<10} {}", "branches:", branches);
  println!("  {:<10} {}", "active:", view.active_branch);
  println!("  {:<10} {}", "tags:", if view.tags.is_empty() { "-".to_string() } else { view.tags.join(", ") });

  match &view.module {
    Some(module) => println!("  {:<10} {}", "module:", module.display()),
    None => println!("  {:<10} -", "module:"),
  }
  match &view.version {
    Some(version) => println!("  {:<10} {}", "version:", version),
    None => println!("  {:<10} -", "version:"),
  }

  println!();
}

//! Git operations abstraction
//!
//! Release sequencing talks to git through the [`GitOps`] trait so the
//! curator can be driven against a fake backend in tests. The production
//! implementation is [`SystemGit`], a thin subprocess wrapper over the
//! system git binary.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::CuratorResult;
use std::path::{Path, PathBuf};

/// Capability set the release curator needs from version control
///
/// Every operation blocks until the underlying git subprocess completes.
/// Implementations assume exclusive access to the working copy; no two
/// release operations run concurrently against the same repository.
pub trait GitOps {
  /// Root of the working tree
  fn work_tree(&self) -> &Path;

  /// Name of the currently checked-out branch
  fn current_branch(&self) -> CuratorResult<String>;

  /// All local branch names
  fn local_branches(&self) -> CuratorResult<Vec<String>>;

  /// All tag names
  fn tags(&self) -> CuratorResult<Vec<String>>;

  /// Whether a tag with this exact name exists
  fn tag_exists(&self, name: &str) -> CuratorResult<bool> {
    Ok(self.tags()?.iter().any(|t| t == name))
  }

  /// Checkout a branch, optionally creating it first
  fn checkout(&self, branch: &str, create: bool) -> CuratorResult<()>;

  /// Stage exactly the given paths (relative to the work tree)
  fn stage(&self, paths: &[PathBuf]) -> CuratorResult<()>;

  /// Commit staged changes with a message
  fn commit(&self, message: &str) -> CuratorResult<()>;

  /// Create an annotated tag at HEAD
  fn create_annotated_tag(&self, name: &str, message: &str) -> CuratorResult<()>;

  /// Merge a branch into the current branch with a merge-commit message
  fn merge(&self, branch: &str, message: &str) -> CuratorResult<()>;

  /// Push a ref to a remote, optionally setting upstream tracking
  fn push(&self, remote: &str, refname: &str, set_upstream: bool, force: bool) -> CuratorResult<()>;

  /// URL of a configured remote, if any
  fn remote_url(&self, name: &str) -> CuratorResult<Option<String>>;
}

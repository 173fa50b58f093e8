//! Release sequencing over a local working copy
//!
//! The curator owns the guarded state transitions that move a project from
//! its current state to a released state: cut a release branch (version bump
//! plus changelog entry, committed and pushed), tag a release from the trunk,
//! and merge a release branch back. Each step is all-or-nothing best-effort:
//! a failure midway leaves the repository in the partially-mutated state and
//! reports it; nothing is rolled back or retried.
//!
//! Known gap, kept on purpose: nothing stops `create_release_branch` while a
//! release branch is already active. Repeated calls create sibling or nested
//! branches.

use crate::core::error::{CuratorError, CuratorResult, ReleaseError};
use crate::core::vcs::{GitOps, SystemGit};
use crate::project::{self, ModuleDescriptor, changelog, version};
use std::path::{Path, PathBuf};

/// The long-lived integration branch releases are cut from and merged into
pub const TRUNK_BRANCH: &str = "main";

/// Remote that release branches and tags are pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Sequences release operations against a git backend
///
/// Generic over [`GitOps`] so tests can drive it with a fake backend.
pub struct ReleaseCurator<G: GitOps = SystemGit> {
  git: G,
}

impl ReleaseCurator<SystemGit> {
  /// Open the repository at or above `path`
  ///
  /// Fails with `RepoNotFound` when no git metadata is found; the curator
  /// cannot be constructed without a working copy.
  pub fn open(path: &Path) -> CuratorResult<Self> {
    Ok(Self {
      git: SystemGit::open(path)?,
    })
  }
}

impl<G: GitOps> ReleaseCurator<G> {
  /// Wrap an already-opened backend
  pub fn with_backend(git: G) -> Self {
    Self { git }
  }

  /// The underlying git backend
  pub fn git(&self) -> &G {
    &self.git
  }

  /// Repository root
  pub fn root(&self) -> &Path {
    self.git.work_tree()
  }

  /// Branch names mapped to whether each is the active branch
  ///
  /// Exactly one entry is active. Pure read, no side effects.
  pub fn branches(&self) -> CuratorResult<Vec<(String, bool)>> {
    let active = self.git.current_branch()?;
    Ok(
      self
        .git
        .local_branches()?
        .into_iter()
        .map(|name| {
          let is_active = name == active;
          (name, is_active)
        })
        .collect(),
    )
  }

  /// All tag names
  pub fn tags(&self) -> CuratorResult<Vec<String>> {
    self.git.tags()
  }

  /// Locate the version-bearing module
  ///
  /// Recomputed on every call; returns `None` (after diagnostics) when the
  /// manifest, source root, or version file cannot be resolved.
  pub fn discover_module(&self) -> Option<ModuleDescriptor> {
    project::discover(self.root())
  }

  /// Current version string from the discovered module, if any
  pub fn current_version(&self) -> Option<String> {
    let module = self.discover_module()?;
    version::read_version(&module.version_file()).ok().flatten()
  }

  /// Cut a release branch: trunk -> release-branch transition
  ///
  /// Creates and switches to a branch named after `release_version`, rewrites
  /// the module's version line, appends a changelog entry, commits exactly
  /// those two files, and pushes the branch with upstream tracking. A failed
  /// push leaves every local step applied; this partial state is reported,
  /// not rolled back.
  pub fn create_release_branch(&self, release_version: &str, description: &str) -> CuratorResult<String> {
    let module = self.discover_module().ok_or_else(|| {
      CuratorError::Release(ReleaseError::ModuleNotFound {
        root: self.root().to_path_buf(),
      })
    })?;

    self.git.checkout(release_version, true)?;

    let version_file = module.version_file();
    version::write_version(&version_file, release_version)?;

    let changelog_written = changelog::append_entry(self.root(), release_version, description)?;

    let mut staged = vec![self.relative_to_root(&version_file)];
    if changelog_written {
      staged.push(PathBuf::from(changelog::CHANGELOG_FILE));
    }
    self.git.stage(&staged)?;
    self.git.commit(&format!("Start release {}: {}", release_version, description))?;

    self.git.push(DEFAULT_REMOTE, release_version, true, false)?;

    Ok(format!(
      "Release branch '{}' created and pushed to {}",
      release_version, DEFAULT_REMOTE
    ))
  }

  /// Create an annotated tag and push it
  ///
  /// Guarded side-action: only permitted while the trunk branch is active.
  /// Refuses to overwrite an existing tag. A failed push leaves the local
  /// tag intact.
  pub fn create_tag(&self, tag_name: &str, message: &str) -> CuratorResult<String> {
    let active = self.git.current_branch()?;
    if active != TRUNK_BRANCH {
      return Err(CuratorError::Release(ReleaseError::WrongBranch {
        expected: TRUNK_BRANCH.to_string(),
        actual: active,
      }));
    }

    if self.git.tag_exists(tag_name)? {
      return Err(CuratorError::Release(ReleaseError::TagExists {
        name: tag_name.to_string(),
      }));
    }

    self.git.create_annotated_tag(tag_name, message)?;
    self.git.push(DEFAULT_REMOTE, tag_name, false, false)?;

    Ok(format!("Tag '{}' created and pushed to {}", tag_name, DEFAULT_REMOTE))
  }

  /// Merge a release branch back into the trunk
  ///
  /// Switches to the trunk and merges with the given merge-commit message.
  /// Conflicts surface verbatim from git; no resolution assistance.
  pub fn merge_to_main(&self, branch_name: &str, message: &str) -> CuratorResult<String> {
    self.git.checkout(TRUNK_BRANCH, false)?;
    self.git.merge(branch_name, message)?;

    Ok(format!("Merged '{}' into {}", branch_name, TRUNK_BRANCH))
  }

  /// Make a path relative to the repository root for staging
  fn relative_to_root(&self, path: &Path) -> PathBuf {
    path.strip_prefix(self.root()).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
  }
}

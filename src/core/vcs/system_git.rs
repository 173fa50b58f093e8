//! System git backend - zero crate dependencies
//!
//! Uses git porcelain commands through subprocesses with an isolated
//! environment, so the user's global config cannot change behavior under us.

use super::GitOps;
use crate::core::error::{CuratorError, CuratorResult, GitError, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using the system git binary
pub struct SystemGit {
  /// Path the repository was opened from
  pub(crate) repo_path: PathBuf,

  /// Working tree root (resolved via rev-parse)
  pub(crate) work_tree: PathBuf,
}

impl SystemGit {
  /// Open a git repository at or above `path`
  ///
  /// One subprocess call resolves the working tree root. Fails with
  /// `RepoNotFound` when no repository exists anywhere up the tree; this is
  /// fatal for the curator, there is no recovery path.
  pub fn open(path: &Path) -> CuratorResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(CuratorError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(CuratorError::message(format!("Failed to open git repository: {}", stderr)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let work_tree = stdout.trim();

    Ok(Self {
      repo_path: path.to_path_buf(),
      work_tree: PathBuf::from(work_tree),
    })
  }

  /// Repository description from .git/description, if one was written
  ///
  /// Git's stock placeholder text is treated as absent.
  pub fn description(&self) -> Option<String> {
    let git_dir = self.git_dir().ok()?;
    let text = std::fs::read_to_string(git_dir.join("description")).ok()?;
    let text = text.trim();
    if text.is_empty() || text.starts_with("Unnamed repository") {
      None
    } else {
      Some(text.to_string())
    }
  }

  /// Resolve the .git directory
  fn git_dir(&self) -> CuratorResult<PathBuf> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--absolute-git-dir"])
      .output()
      .context("Failed to resolve git dir")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(CuratorError::Git(GitError::CommandFailed {
        command: "git rev-parse --absolute-git-dir".to_string(),
        stderr: stderr.to_string(),
      }));
    }

    Ok(PathBuf::from(String::from_utf8_lossy(&output.stdout).trim()))
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to the repo path
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Adds safe configuration overrides
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }

  /// Run a git command, mapping non-zero exit to `CommandFailed`
  fn run(&self, args: &[&str]) -> CuratorResult<String> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(CuratorError::Git(GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
  }
}

impl GitOps for SystemGit {
  fn work_tree(&self) -> &Path {
    &self.work_tree
  }

  fn current_branch(&self) -> CuratorResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  fn local_branches(&self) -> CuratorResult<Vec<String>> {
    let stdout = self.run(&["branch", "--list", "--format=%(refname:short)"])?;
    Ok(stdout.lines().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
  }

  fn tags(&self) -> CuratorResult<Vec<String>> {
    let stdout = self.run(&["tag", "--list"])?;
    Ok(stdout.lines().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
  }

  fn checkout(&self, branch: &str, create: bool) -> CuratorResult<()> {
    if create {
      self.run(&["checkout", "-b", branch])?;
    } else {
      self.run(&["checkout", branch])?;
    }
    Ok(())
  }

  fn stage(&self, paths: &[PathBuf]) -> CuratorResult<()> {
    let mut args = vec!["add".to_string(), "--".to_string()];
    for path in paths {
      args.push(path.to_string_lossy().to_string());
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    self.run(&arg_refs)?;
    Ok(())
  }

  fn commit(&self, message: &str) -> CuratorResult<()> {
    self.run(&["commit", "-m", message])?;
    Ok(())
  }

  fn create_annotated_tag(&self, name: &str, message: &str) -> CuratorResult<()> {
    // No -f: an existing tag of the same name makes this fail rather than
    // silently moving the old tag.
    self.run(&["tag", "-a", name, "-m", message])?;
    Ok(())
  }

  fn merge(&self, branch: &str, message: &str) -> CuratorResult<()> {
    let output = self
      .git_cmd()
      .args(["merge", branch, "-m", message])
      .output()
      .context("Failed to execute git merge")?;

    if !output.status.success() {
      // Surface git's own text verbatim; conflict state (if any) is left for
      // the user to resolve or abort.
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      let detail = if stderr.trim().is_empty() { stdout } else { stderr };
      return Err(CuratorError::Git(GitError::MergeConflict {
        branch: branch.to_string(),
        stderr: detail.to_string(),
      }));
    }

    Ok(())
  }

  fn push(&self, remote: &str, refname: &str, set_upstream: bool, force: bool) -> CuratorResult<()> {
    let mut args = vec!["push"];
    if set_upstream {
      args.push("-u");
    }
    if force {
      args.push("--force");
    }
    args.push(remote);
    args.push(refname);

    let output = self
      .git_cmd()
      .args(&args)
      .output()
      .context("Failed to execute git push")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(CuratorError::Git(GitError::PushFailed {
        remote: remote.to_string(),
        refname: refname.to_string(),
        reason: stderr.to_string(),
      }));
    }

    Ok(())
  }

  fn remote_url(&self, name: &str) -> CuratorResult<Option<String>> {
    let output = self
      .git_cmd()
      .args(["config", "--get", &format!("remote.{}.url", name)])
      .output()
      .context("Failed to read remote url")?;

    // Exit code 1 just means the remote is not configured
    if !output.status.success() {
      return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if url.is_empty() { None } else { Some(url) })
  }
}

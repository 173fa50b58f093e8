//! Reset-repository command
//!
//! Throws away the repository's history: deletes .git, re-initializes on
//! `main`, restores the origin remote, and creates a fresh initial commit.
//! Destructive and unrecoverable, so it prompts for confirmation unless
//! `--yes` is passed.

use dialoguer::Confirm;
use std::env;
use std::path::Path;
use std::process::Command;

use crate::core::curator::{DEFAULT_REMOTE, ReleaseCurator, TRUNK_BRANCH};
use crate::core::error::{CuratorError, CuratorResult, GitError, ResultExt};
use crate::core::vcs::GitOps;

/// Run the reset command
pub fn run_reset(force_push: bool, yes: bool) -> CuratorResult<()> {
  let curator = ReleaseCurator::open(&env::current_dir()?)?;
  let root = curator.root().to_path_buf();

  // Remember the origin URL so it survives the reset
  let remote_url = curator.git().remote_url(DEFAULT_REMOTE)?;
  match &remote_url {
    Some(url) => println!("Found remote '{}': {}", DEFAULT_REMOTE, url),
    None => println!("No remote '{}' configured.", DEFAULT_REMOTE),
  }

  println!("\n⚠️  This permanently deletes the git history of {}", root.display());
  println!("   and re-creates the repository on branch '{}'.", TRUNK_BRANCH);
  if force_push {
    match &remote_url {
      Some(url) => println!("   The new history will be FORCE PUSHED to {}, overwriting the remote.", url),
      None => println!("   --force-push was requested but there is no remote to push to."),
    }
  }

  if !yes {
    let confirmed = Confirm::new()
      .with_prompt(format!("Reset the repository at {}?", root.display()))
      .default(false)
      .interact()?;
    if !confirmed {
      println!("Operation cancelled.");
      return Ok(());
    }
  }

  std::fs::remove_dir_all(root.join(".git")).context("Failed to delete .git directory")?;

  git(&root, &["init", &format!("--initial-branch={}", TRUNK_BRANCH)])?;
  if let Some(url) = &remote_url {
    git(&root, &["remote", "add", DEFAULT_REMOTE, url])?;
  }
  git(&root, &["add", "-A"])?;
  git(&root, &["commit", "-m", "Initial commit"])?;
  println!("✅ Repository re-initialized on '{}'", TRUNK_BRANCH);

  if force_push && remote_url.is_some() {
    let fresh = ReleaseCurator::open(&root)?;
    fresh.git().push(DEFAULT_REMOTE, TRUNK_BRANCH, true, true)?;
    println!("✅ Force-pushed '{}' to {}", TRUNK_BRANCH, DEFAULT_REMOTE);
  }

  Ok(())
}

/// Run git directly; the curator's backend is unusable mid-reset
fn git(root: &Path, args: &[&str]) -> CuratorResult<()> {
  let output = Command::new("git")
    .current_dir(root)
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

  Ok(())
}

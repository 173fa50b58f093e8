//! Integration tests for `curator branch`

use crate::helpers::{TestWorkspace, git, run_curator, run_curator_unchecked};
use anyhow::Result;

#[test]
fn test_branch_cuts_release_branch() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;

  run_curator(&ws.path, &["branch", "2.0.0", "--description", "streaming support"])?;

  // Active branch is the release branch
  assert_eq!(ws.current_branch()?, "2.0.0");

  // Version file rewritten, old version gone
  let init = ws.read_file("src/widget/__init__.py")?;
  assert!(init.contains("2.0.0"));
  assert!(!init.contains("1.4.0"));

  // Changelog gained a section headed by the new version
  let changelog = ws.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("## 2.0.0"));
  assert!(changelog.contains("streaming support"));

  // Committed with the version and description embedded
  let message = ws.last_commit_message()?;
  assert!(message.contains("2.0.0"));
  assert!(message.contains("streaming support"));

  // Branch exists on the remote with upstream tracking
  let remote_heads = git(&ws.remote_path, &["branch", "--list", "--format=%(refname:short)"])?;
  let remote_heads = String::from_utf8_lossy(&remote_heads.stdout).to_string();
  assert!(remote_heads.contains("2.0.0"), "release branch should be pushed: {}", remote_heads);

  Ok(())
}

#[test]
fn test_branch_push_failure_keeps_local_changes() -> Result<()> {
  // No remote configured: the push fails, everything local stays applied
  let ws = TestWorkspace::new("1.4.0")?;

  let output = run_curator_unchecked(&ws.path, &["branch", "2.0.0", "--description", "desc"])?;
  assert!(!output.status.success());

  assert_eq!(ws.current_branch()?, "2.0.0");
  assert!(ws.read_file("src/widget/__init__.py")?.contains("2.0.0"));
  assert!(ws.read_file("CHANGELOG.md")?.contains("## 2.0.0"));
  assert_eq!(ws.commit_count()?, 2);

  Ok(())
}

#[test]
fn test_branch_without_module_mutates_nothing() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  std::fs::remove_dir_all(ws.path.join("src"))?;
  std::fs::remove_file(ws.path.join("pyproject.toml"))?;
  ws.commit("Drop the module")?;

  let output = run_curator_unchecked(&ws.path, &["branch", "2.0.0", "--description", "desc"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("module"), "should report discovery failure: {}", stderr);

  assert_eq!(ws.current_branch()?, "main");
  assert_eq!(ws.commit_count()?, 2);

  Ok(())
}

#[test]
fn test_branch_warns_on_non_semver_version() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;

  let output = run_curator(&ws.path, &["branch", "next-release", "--description", "desc"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stderr.contains("not a semantic version"), "expected a warning: {}", stderr);
  assert_eq!(ws.current_branch()?, "next-release");

  Ok(())
}

#[test]
fn test_branch_missing_changelog_is_not_fatal() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  std::fs::remove_file(ws.path.join("CHANGELOG.md"))?;
  ws.commit("Drop the changelog")?;
  ws.add_remote()?;

  let output = run_curator(&ws.path, &["branch", "2.0.0", "--description", "desc"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stderr.contains("CHANGELOG.md"), "expected a warning: {}", stderr);
  assert_eq!(ws.current_branch()?, "2.0.0");
  assert!(ws.read_file("src/widget/__init__.py")?.contains("2.0.0"));

  Ok(())
}

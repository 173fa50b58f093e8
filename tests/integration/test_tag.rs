//! Integration tests for `curator tag`

use crate::helpers::{TestWorkspace, git, run_curator, run_curator_unchecked};
use anyhow::Result;

#[test]
fn test_tag_creates_and_pushes_annotated_tag() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;

  run_curator(&ws.path, &["tag", "v1.4.0", "--message", "release notes"])?;

  assert_eq!(ws.tags()?, vec!["v1.4.0".to_string()]);

  // Annotated, not lightweight
  let kind = git(&ws.path, &["cat-file", "-t", "v1.4.0"])?;
  assert_eq!(String::from_utf8_lossy(&kind.stdout).trim(), "tag");

  // Pushed to the remote
  let remote_tags = git(&ws.remote_path, &["tag", "--list"])?;
  assert!(String::from_utf8_lossy(&remote_tags.stdout).contains("v1.4.0"));

  Ok(())
}

#[test]
fn test_tag_off_trunk_fails_and_creates_nothing() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  git(&ws.path, &["checkout", "-b", "2.0.0"])?;

  let output = run_curator_unchecked(&ws.path, &["tag", "v2.0.0", "--message", "release notes"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Must be on 'main'"), "should report the branch guard: {}", stderr);

  assert!(ws.tags()?.is_empty());

  Ok(())
}

#[test]
fn test_tag_refuses_to_overwrite_existing_tag() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;
  git(&ws.path, &["tag", "-a", "v1.0.0", "-m", "original"])?;
  let original_target = git(&ws.path, &["rev-parse", "v1.0.0"])?;

  // Move HEAD so an overwrite would be observable
  ws.write_file("CHANGELOG.md", "# Changelog\n\nedited\n")?;
  ws.commit("Edit changelog")?;

  let output = run_curator_unchecked(&ws.path, &["tag", "v1.0.0", "--message", "msg"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("already exists"), "should refuse the overwrite: {}", stderr);

  // The existing tag still points where it did
  let target_now = git(&ws.path, &["rev-parse", "v1.0.0"])?;
  assert_eq!(original_target.stdout, target_now.stdout);

  Ok(())
}

#[test]
fn test_tag_push_failure_leaves_local_tag() -> Result<()> {
  // No remote: the push fails after the tag is created locally
  let ws = TestWorkspace::new("1.4.0")?;

  let output = run_curator_unchecked(&ws.path, &["tag", "v1.4.0", "--message", "msg"])?;
  assert!(!output.status.success());

  assert_eq!(ws.tags()?, vec!["v1.4.0".to_string()]);

  Ok(())
}

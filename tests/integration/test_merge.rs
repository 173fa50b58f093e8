//! Integration tests for `curator merge`

use crate::helpers::{TestWorkspace, git, run_curator, run_curator_unchecked};
use anyhow::Result;

#[test]
fn test_merge_release_branch_into_main() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;

  run_curator(&ws.path, &["branch", "2.0.0", "--description", "big release"])?;
  run_curator(&ws.path, &["merge", "2.0.0"])?;

  assert_eq!(ws.current_branch()?, "main");
  assert!(ws.read_file("src/widget/__init__.py")?.contains("2.0.0"));
  assert!(ws.read_file("CHANGELOG.md")?.contains("## 2.0.0"));

  Ok(())
}

#[test]
fn test_merge_uses_given_commit_message() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.add_remote()?;

  run_curator(&ws.path, &["branch", "2.0.0", "--description", "big release"])?;

  // Diverge main so the merge produces a merge commit
  git(&ws.path, &["checkout", "main"])?;
  ws.write_file("README.md", "# widget\n")?;
  ws.commit("Add readme")?;

  run_curator(&ws.path, &["merge", "2.0.0", "--message", "Release 2.0.0"])?;

  assert_eq!(ws.last_commit_message()?, "Release 2.0.0");

  Ok(())
}

#[test]
fn test_merge_conflict_surfaces_git_message() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;

  // Conflicting edits to the version file on both branches
  git(&ws.path, &["checkout", "-b", "2.0.0"])?;
  ws.write_file("src/widget/__init__.py", "__version__ = '2.0.0'\n")?;
  ws.commit("Bump to 2.0.0")?;

  git(&ws.path, &["checkout", "main"])?;
  ws.write_file("src/widget/__init__.py", "__version__ = '3.0.0'\n")?;
  ws.commit("Bump to 3.0.0")?;

  let output = run_curator_unchecked(&ws.path, &["merge", "2.0.0"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.contains("did not complete") || stderr.contains("CONFLICT"),
    "git's own message should be surfaced: {}",
    stderr
  );

  // The checkout happened; git's own merge-state semantics apply from here
  assert_eq!(ws.current_branch()?, "main");

  Ok(())
}

#[test]
fn test_merge_unknown_branch_fails() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;

  let output = run_curator_unchecked(&ws.path, &["merge", "no-such-branch"])?;
  assert!(!output.status.success());

  assert_eq!(ws.current_branch()?, "main");

  Ok(())
}

//! Integration tests for `curator reset`

use crate::helpers::{TestWorkspace, git, run_curator_env};
use anyhow::Result;

#[test]
fn test_reset_reinitializes_history() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.write_file("README.md", "# widget\n")?;
  ws.commit("Add readme")?;
  ws.add_remote()?;
  assert_eq!(ws.commit_count()?, 2);

  let home = ws.isolated_home()?;
  let output = run_curator_env(&ws.path, &["reset", "--yes"], &[("HOME", home.to_str().unwrap())])?;
  assert!(
    output.status.success(),
    "reset should succeed: {}",
    String::from_utf8_lossy(&output.stderr)
  );

  // Fresh single-commit history on main, working files intact
  assert_eq!(ws.commit_count()?, 1);
  assert_eq!(ws.current_branch()?, "main");
  assert!(ws.read_file("README.md")?.contains("widget"));

  // Remote configuration survived the reset
  let url = git(&ws.path, &["config", "--get", "remote.origin.url"])?;
  let url = String::from_utf8_lossy(&url.stdout).trim().to_string();
  assert_eq!(url, ws.remote_path.to_string_lossy());

  Ok(())
}

#[test]
fn test_reset_force_push_overwrites_remote() -> Result<()> {
  let ws = TestWorkspace::new("1.4.0")?;
  ws.write_file("README.md", "# widget\n")?;
  ws.commit("Add readme")?;
  ws.add_remote()?;
  git(&ws.path, &["push", "origin", "main"])?;

  let home = ws.isolated_home()?;
  let output = run_curator_env(
    &ws.path,
    &["reset", "--yes", "--force-push"],
    &[("HOME", home.to_str().unwrap())],
  )?;
  assert!(
    output.status.success(),
    "reset should succeed: {}",
    String::from_utf8_lossy(&output.stderr)
  );

  // The remote now holds exactly the fresh history
  let count = git(&ws.remote_path, &["rev-list", "--count", "main"])?;
  assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "1");

  Ok(())
}

//! Create-release-branch command

use semver::Version;
use std::env;

use crate::commands::status;
use crate::core::curator::ReleaseCurator;
use crate::core::error::CuratorResult;

/// Run the branch command: cut a release branch for `release_version`
pub fn run_branch(release_version: String, description: String) -> CuratorResult<()> {
  // The version is opaque text to the curator; a non-semver string is only
  // worth a warning.
  if Version::parse(&release_version).is_err() {
    eprintln!("⚠️  '{}' is not a semantic version; proceeding anyway", release_version);
  }

  let curator = ReleaseCurator::open(&env::current_dir()?)?;

  if let Some(current) = curator.current_version() {
    println!("Bumping {} -> {}", current, release_version);
  }

  let message = curator.create_release_branch(&release_version, &description)?;
  println!("✅ {}", message);

  status::print_refreshed(&curator)
}

//! Merge-release-branch command

use std::env;

use crate::commands::status;
use crate::core::curator::ReleaseCurator;
use crate::core::error::CuratorResult;

/// Run the merge command: merge a release branch back into the trunk
pub fn run_merge(branch_name: String, message: Option<String>) -> CuratorResult<()> {
  let message = message.unwrap_or_else(|| format!("Merge release {}", branch_name));

  let curator = ReleaseCurator::open(&env::current_dir()?)?;
  let outcome = curator.merge_to_main(&branch_name, &message)?;
  println!("✅ {}", outcome);

  status::print_refreshed(&curator)
}

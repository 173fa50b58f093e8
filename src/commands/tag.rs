//! Tag-release command

use std::env;

use crate::commands::status;
use crate::core::curator::ReleaseCurator;
use crate::core::error::CuratorResult;

/// Run the tag command: annotated tag on the trunk, pushed to the remote
pub fn run_tag(tag_name: String, message: String) -> CuratorResult<()> {
  let curator = ReleaseCurator::open(&env::current_dir()?)?;
  let outcome = curator.create_tag(&tag_name, &message)?;
  println!("✅ {}", outcome);

  status::print_refreshed(&curator)
}

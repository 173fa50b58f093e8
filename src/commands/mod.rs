//! CLI commands for curator
//!
//! One module per user-triggered action:
//!
//! - **status**: read-only dashboard view (branches, tags, module, version)
//! - **branch**: cut a release branch (version bump + changelog + push)
//! - **merge**: merge a release branch back into the trunk
//! - **tag**: annotated release tag from the trunk
//! - **reset**: wipe history and re-initialize the repository
//!
//! Every mutating command re-prints the status view after it succeeds.

pub mod branch;
pub mod merge;
pub mod reset;
pub mod status;
pub mod tag;

pub use branch::run_branch;
pub use merge::run_merge;
pub use reset::run_reset;
pub use status::run_status;
pub use tag::run_tag;

//! Core engine for curator operations
//!
//! - **curator**: release sequencing (branch, tag, merge) over a git backend
//! - **error**: typed error kinds with exit codes and help messages
//! - **vcs**: git operations abstraction (GitOps trait, SystemGit)

pub mod curator;
pub mod error;
pub mod vcs;

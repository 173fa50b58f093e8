//! Integration tests for the curator binary

mod test_branch;
mod test_merge;
mod test_reset;
mod test_tag;

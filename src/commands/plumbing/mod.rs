//! Plumbing queries
//!
//! - `branches`: `git branch --list` and `git branch --show-current`
//! - `remotes`: `git remote`

pub mod branches;
pub mod remotes;

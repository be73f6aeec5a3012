//! Command-line front-end for git.
//!
//! Every feature is one call (merge makes two) to [`CommandRunner`], which
//! runs `git` with a fixed argument vector in an explicit working directory
//! and reports a [`CommandResult`] or a typed [`CommandError`].
//!
//! - `areas`: the [`Repository`] binding operations hang off
//! - `artifacts`: runner, command vocabulary, parsing and shared utilities
//! - `commands`: plumbing queries and porcelain features

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::repository::Repository;
pub use artifacts::branch::branch_list::BranchList;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::core::error::{RepositoryError, RepositoryResult};
pub use artifacts::runner::command_error::CommandError;
pub use artifacts::runner::command_request::CommandRequest;
pub use artifacts::runner::command_result::CommandResult;
pub use artifacts::runner::command_runner::{CommandRunner, RunnerConfig};
pub use artifacts::vocabulary::git_command::GitCommand;

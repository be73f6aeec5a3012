use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::runner::GIT_EXECUTABLE;
use crate::artifacts::vocabulary::git_command::GitCommand;

/// Turns a typed command line into a [`GitCommand::FreeForm`].
///
/// The line is split on whitespace with no quoting rules, and it must start
/// with the git executable name. The leading `git` token is dropped; the
/// rest is passed to the process as separate arguments.
pub fn parse_free_form(input: &str) -> RepositoryResult<GitCommand> {
    let mut tokens = input.split_whitespace();

    match tokens.next() {
        None => Err(RepositoryError::Rejected("empty command".to_string())),
        Some(GIT_EXECUTABLE) => Ok(GitCommand::FreeForm(
            tokens.map(str::to_string).collect(),
        )),
        Some(_) => Err(RepositoryError::Rejected(format!(
            "only {} commands are allowed: {}",
            GIT_EXECUTABLE,
            input.trim()
        ))),
    }
}

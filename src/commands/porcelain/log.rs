use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    /// Commit graph of every ref, one line per commit.
    pub async fn history(&self) -> RepositoryResult<CommandResult> {
        self.execute_and_forward(&GitCommand::History).await
    }
}

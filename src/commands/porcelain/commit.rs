use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    /// An empty message is rejected before git is spawned.
    pub async fn commit(&self, message: &str) -> RepositoryResult<CommandResult> {
        let command = GitCommand::commit(message)?;

        self.execute_and_forward(&command).await
    }
}

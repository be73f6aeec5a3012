use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    pub async fn status(&self) -> RepositoryResult<CommandResult> {
        self.execute_and_forward(&GitCommand::Status).await
    }
}

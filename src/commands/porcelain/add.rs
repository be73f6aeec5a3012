use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    /// Stages everything under the working directory (`git add .`).
    pub async fn add_all(&self) -> RepositoryResult<CommandResult> {
        self.execute_and_forward(&GitCommand::AddAll).await
    }
}

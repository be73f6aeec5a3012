use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    /// Switches to an existing branch (`git checkout <name>`).
    pub async fn switch(&self, name: &str) -> RepositoryResult<CommandResult> {
        let name = BranchName::try_parse(name)?;
        self.ensure_branch_exists(&name).await?;

        self.execute_and_forward(&GitCommand::Switch { name }).await
    }
}

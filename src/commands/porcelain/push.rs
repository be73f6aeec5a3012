use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    /// Pushes `branch` (or the current branch) to `origin`. `--force` is only
    /// passed when `force` is set.
    pub async fn push(&self, branch: Option<&str>, force: bool) -> RepositoryResult<CommandResult> {
        let branch = match branch {
            Some(name) => BranchName::try_parse(name)?,
            None => self.current_branch().await?,
        };

        self.execute_and_forward(&GitCommand::Push { branch, force })
            .await
    }
}

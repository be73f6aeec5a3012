use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_list::BranchList;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    pub async fn branch_list(&self) -> RepositoryResult<BranchList> {
        let result = self.execute(&GitCommand::BranchList).await?;

        Ok(BranchList::parse(result.stdout()))
    }

    /// Name of the checked-out branch. Fails on a detached HEAD.
    pub async fn current_branch(&self) -> RepositoryResult<BranchName> {
        let result = self.execute(&GitCommand::CurrentBranch).await?;
        let name = result.stdout().trim();

        if name.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "HEAD is detached, no current branch".to_string(),
            ));
        }

        BranchName::try_parse(name)
    }

    pub(crate) async fn ensure_branch_exists(&self, name: &BranchName) -> RepositoryResult<()> {
        if self.branch_list().await?.contains(name.as_str()) {
            Ok(())
        } else {
            Err(RepositoryError::UnknownBranch(name.to_string()))
        }
    }

    pub(crate) async fn ensure_branch_absent(&self, name: &BranchName) -> RepositoryResult<()> {
        if self.branch_list().await?.contains(name.as_str()) {
            Err(RepositoryError::BranchExists(name.to_string()))
        } else {
            Ok(())
        }
    }
}

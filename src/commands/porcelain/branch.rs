use crate::areas::repository::Repository;
use crate::artifacts::branch::CURRENT_BRANCH_MARKER;
use crate::artifacts::branch::branch_list::BranchList;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Creates `name` and switches to it (`git checkout -b`).
    ///
    /// An existing branch is reported as [`RepositoryError::BranchExists`]
    /// instead of being switched to; use [`Repository::switch`] for that.
    pub async fn create_branch(&self, name: &str) -> RepositoryResult<CommandResult> {
        let name = BranchName::try_parse(name)?;
        self.ensure_branch_absent(&name).await?;

        self.execute_and_forward(&GitCommand::CreateBranch { name })
            .await
    }

    pub async fn delete_branch(&self, name: &str) -> RepositoryResult<CommandResult> {
        let name = BranchName::try_parse(name)?;
        self.ensure_branch_exists(&name).await?;

        self.execute_and_forward(&GitCommand::DeleteBranch { name })
            .await
    }

    pub async fn rename_branch(&self, old: &str, new: &str) -> RepositoryResult<CommandResult> {
        let old = BranchName::try_parse(old)?;
        let new = BranchName::try_parse(new)?;

        let branches = self.branch_list().await?;
        if !branches.contains(old.as_str()) {
            return Err(RepositoryError::UnknownBranch(old.to_string()));
        }
        if branches.contains(new.as_str()) {
            return Err(RepositoryError::BranchExists(new.to_string()));
        }

        self.execute_and_forward(&GitCommand::RenameBranch { old, new })
            .await
    }

    /// Prints every branch, marking the current one, and returns the parsed list.
    pub async fn list_branches(&self) -> RepositoryResult<BranchList> {
        let branches = self.branch_list().await?;

        let mut writer = self.writer();
        for branch in branches.branches() {
            if branches.current() == Some(branch.as_str()) {
                writeln!(
                    writer,
                    "{}",
                    format!("{} {}", CURRENT_BRANCH_MARKER, branch).green()
                )?;
            } else {
                writeln!(writer, "  {}", branch)?;
            }
        }
        writer.flush()?;

        Ok(branches)
    }
}

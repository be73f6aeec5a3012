use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;
use tracing::warn;

impl Repository {
    /// Checks out `target`, then merges `source` into it.
    ///
    /// Both names must be listed branches. Anything else, such as a file path
    /// that `git checkout` would treat as a pathspec, is rejected before the
    /// checkout runs.
    ///
    /// The two steps are not atomic. A failed checkout stops before the merge
    /// and is reported as that step's failure. A failed merge after a
    /// successful checkout is reported as [`RepositoryError::PartialMerge`],
    /// since the repository is then left on `target` with the merge unfinished.
    pub async fn merge(&self, source: &str, target: &str) -> RepositoryResult<CommandResult> {
        let source = BranchName::try_parse(source)?;
        let target = BranchName::try_parse(target)?;

        if source == target {
            return Err(RepositoryError::InvalidInput(format!(
                "cannot merge '{}' into itself",
                source
            )));
        }

        let branches = self.branch_list().await?;
        for name in [&target, &source] {
            if !branches.contains(name.as_str()) {
                return Err(RepositoryError::UnknownBranch(name.to_string()));
            }
        }

        self.execute_and_forward(&GitCommand::Switch {
            name: target.clone(),
        })
        .await?;

        let merge = GitCommand::Merge {
            source: source.clone(),
        };
        let result = self.execute(&merge).await.map_err(|e| match e {
            RepositoryError::Step { source: error, .. } => {
                warn!(branch = %target, merged = %source, "merge failed after checkout");
                RepositoryError::PartialMerge {
                    target: target.to_string(),
                    merged: source.to_string(),
                    source: error,
                }
            }
            other => other,
        })?;
        self.forward(&result)?;

        Ok(result)
    }
}

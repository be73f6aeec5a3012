use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::remote::remote_list::parse_remote_list;
use crate::artifacts::vocabulary::git_command::GitCommand;

impl Repository {
    pub async fn remote_list(&self) -> RepositoryResult<Vec<String>> {
        let result = self.execute(&GitCommand::RemoteList).await?;

        Ok(parse_remote_list(result.stdout()))
    }
}

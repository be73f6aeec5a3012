use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::remote::remote_spec::RemoteSpec;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;
use std::io::Write;

impl Repository {
    pub async fn add_remote(&self, name: &str, url: &str) -> RepositoryResult<CommandResult> {
        let remote = RemoteSpec::try_parse(name, url)?;

        self.execute_and_forward(&GitCommand::RemoteAdd(remote))
            .await
    }

    /// Prints one remote per line and returns the parsed names.
    pub async fn list_remotes(&self) -> RepositoryResult<Vec<String>> {
        let remotes = self.remote_list().await?;

        let mut writer = self.writer();
        for remote in &remotes {
            writeln!(writer, "{}", remote)?;
        }
        writer.flush()?;

        Ok(remotes)
    }
}

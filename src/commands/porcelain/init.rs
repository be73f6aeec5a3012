use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::git_command::GitCommand;
use std::fs;
use tracing::debug;

impl Repository {
    /// Creates the directory when missing, then runs `git init` inside it.
    pub async fn init(&self) -> RepositoryResult<CommandResult> {
        if !self.path().as_os_str().is_empty() && !self.path().exists() {
            debug!(path = %self.path().display(), "creating repository directory");
            fs::create_dir_all(self.path())?;
        }

        self.execute_and_forward(&GitCommand::Init).await
    }
}

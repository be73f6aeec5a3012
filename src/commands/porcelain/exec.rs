use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::vocabulary::free_form::parse_free_form;

impl Repository {
    /// Runs a typed command line such as `git log -n 5`.
    ///
    /// Anything not starting with `git` is rejected without spawning a process.
    pub async fn exec(&self, input: &str) -> RepositoryResult<CommandResult> {
        let command = parse_free_form(input)?;

        self.execute_and_forward(&command).await
    }
}

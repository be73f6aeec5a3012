use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::runner::command_result::CommandResult;
use crate::artifacts::runner::command_runner::{CommandRunner, RunnerConfig};
use crate::artifacts::vocabulary::git_command::GitCommand;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// A working directory plus the means to run git in it.
///
/// Operations live in `commands::porcelain` (user-facing features) and
/// `commands::plumbing` (queries other operations build on). Every operation
/// maps to one or two git invocations; stdout of each is written verbatim to
/// the repository writer and stderr to the process stderr.
pub struct Repository {
    path: PathBuf,
    writer: RefCell<Box<dyn Write>>,
    runner: CommandRunner,
}

impl Repository {
    pub fn new(
        path: impl Into<PathBuf>,
        writer: Box<dyn Write>,
        config: RunnerConfig,
    ) -> Self {
        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            runner: CommandRunner::new(config),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Runs `command` and reports a failure as the step that produced it.
    pub(crate) async fn execute(&self, command: &GitCommand) -> RepositoryResult<CommandResult> {
        info!(command = %command, "running");

        self.runner
            .run(&command.request(&self.path))
            .await
            .map_err(|e| RepositoryError::step(command.to_string(), e))
    }

    /// Like [`Repository::execute`], then forwards the captured output.
    pub(crate) async fn execute_and_forward(
        &self,
        command: &GitCommand,
    ) -> RepositoryResult<CommandResult> {
        let result = self.execute(command).await?;
        self.forward(&result)?;

        Ok(result)
    }

    pub(crate) fn forward(&self, result: &CommandResult) -> RepositoryResult<()> {
        let mut writer = self.writer();
        write!(writer, "{}", result.stdout())?;
        writer.flush()?;

        if !result.stderr().is_empty() {
            eprint!("{}", result.stderr());
        }

        Ok(())
    }
}

use crate::artifacts::runner::command_error::CommandError;
use crate::artifacts::runner::command_request::CommandRequest;
use crate::artifacts::runner::command_result::CommandResult;
use derive_new::new;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct RunnerConfig {
    timeout: Option<Duration>,
}

/// Executes external commands one at a time.
///
/// Every call spawns a fresh process in the request's working directory and
/// waits for it to exit while capturing both output streams. Calls made
/// while another command is in flight wait for it to finish first.
#[derive(Debug, Default)]
pub struct CommandRunner {
    config: RunnerConfig,
    in_flight: Mutex<()>,
}

impl CommandRunner {
    pub fn new(config: RunnerConfig) -> Self {
        CommandRunner {
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Runs the request with the configured timeout. Any non-zero exit code
    /// is reported as [`CommandError::NonZeroExit`].
    pub async fn run(&self, request: &CommandRequest) -> Result<CommandResult, CommandError> {
        self.run_with_timeout(request, self.config.timeout).await
    }

    pub async fn run_with_timeout(
        &self,
        request: &CommandRequest,
        timeout: Option<Duration>,
    ) -> Result<CommandResult, CommandError> {
        let result = self.execute(request, timeout).await?;

        if result.is_success() {
            Ok(result)
        } else {
            warn!(
                command = %request,
                exit_code = result.exit_code(),
                "command exited with non-zero status"
            );
            Err(CommandError::NonZeroExit {
                exit_code: result.exit_code(),
                stderr: result.stderr().to_string(),
                stdout: result.stdout().to_string(),
            })
        }
    }

    /// Runs the request and hands back the captured result whatever the exit
    /// code was. Launch failures and timeouts are still errors.
    pub async fn run_unchecked(
        &self,
        request: &CommandRequest,
    ) -> Result<CommandResult, CommandError> {
        self.execute(request, self.config.timeout).await
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(dir = %request.working_directory().display(), command = %request)
    )]
    async fn execute(
        &self,
        request: &CommandRequest,
        timeout: Option<Duration>,
    ) -> Result<CommandResult, CommandError> {
        if !request.has_valid_working_directory() {
            warn!("refusing to run in an invalid working directory");
            return Err(CommandError::InvalidWorkingDirectory(
                request.working_directory().to_path_buf(),
            ));
        }

        let _guard = self.in_flight.lock().await;

        let mut command = Command::new(request.executable());
        command
            .args(request.arguments())
            .current_dir(request.working_directory())
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("spawning command");

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    warn!(timeout_ms = limit.as_millis() as u64, "command timed out");
                    CommandError::Timeout(limit)
                })?,
            None => command.output().await,
        }
        .map_err(|e| {
            warn!(error = %e, "failed to launch command");
            CommandError::ProcessLaunchFailed {
                executable: request.executable().to_string(),
                reason: e.to_string(),
            }
        })?;

        let result = CommandResult::from_output(&output);
        debug!(exit_code = result.exit_code(), "command finished");

        Ok(result)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryResult;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const SHELL_PROMPT: &str = "gitfront> ";
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl Repository {
    /// Interactive terminal: every line read from `input` goes through
    /// [`Repository::exec`] until EOF or `exit`/`quit`.
    ///
    /// A failed line is reported on stderr and does not end the session.
    pub async fn shell<R>(&self, input: R) -> RepositoryResult<ShellSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut summary = ShellSummary::default();

        loop {
            {
                let mut writer = self.writer();
                write!(writer, "{}", SHELL_PROMPT)?;
                writer.flush()?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if EXIT_COMMANDS.contains(&line) {
                break;
            }

            match self.exec(line).await {
                Ok(_) => summary.succeeded += 1,
                Err(e) => {
                    summary.failed += 1;
                    eprintln!("{} {:#}", "error:".red().bold(), anyhow::Error::from(e));
                }
            }
        }

        Ok(summary)
    }
}

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::remote::DEFAULT_REMOTE;
use crate::artifacts::remote::remote_spec::RemoteSpec;
use crate::artifacts::runner::GIT_EXECUTABLE;
use crate::artifacts::runner::command_request::CommandRequest;
use std::path::Path;

/// Every git invocation the front-end knows how to make.
///
/// Inputs are validated when the variant is built, so turning a command into
/// an argument vector cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    Init,
    AddAll,
    Commit { message: String },
    Push { branch: BranchName, force: bool },
    Pull,
    Fetch,
    Status,
    CreateBranch { name: BranchName },
    Switch { name: BranchName },
    DeleteBranch { name: BranchName },
    RenameBranch { old: BranchName, new: BranchName },
    Merge { source: BranchName },
    RemoteAdd(RemoteSpec),
    RemoteList,
    BranchList,
    CurrentBranch,
    History,
    FreeForm(Vec<String>),
}

impl GitCommand {
    /// Rejects empty and whitespace-only messages.
    pub fn commit(message: impl Into<String>) -> RepositoryResult<Self> {
        let message = message.into();

        if message.trim().is_empty() {
            return Err(RepositoryError::InvalidInput(
                "commit message cannot be empty".to_string(),
            ));
        }

        Ok(GitCommand::Commit { message })
    }

    /// Arguments passed to the executable, in order.
    pub fn args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            GitCommand::Init => vec!["init"],
            GitCommand::AddAll => vec!["add", "."],
            GitCommand::Commit { message } => vec!["commit", "-m", message.as_str()],
            GitCommand::Push {
                branch,
                force: false,
            } => vec!["push", DEFAULT_REMOTE, branch.as_str()],
            GitCommand::Push {
                branch,
                force: true,
            } => vec!["push", DEFAULT_REMOTE, "--force", branch.as_str()],
            GitCommand::Pull => vec!["pull"],
            GitCommand::Fetch => vec!["fetch"],
            GitCommand::Status => vec!["status"],
            GitCommand::CreateBranch { name } => vec!["checkout", "-b", name.as_str()],
            GitCommand::Switch { name } => vec!["checkout", name.as_str()],
            GitCommand::DeleteBranch { name } => vec!["branch", "-d", name.as_str()],
            GitCommand::RenameBranch { old, new } => {
                vec!["branch", "-m", old.as_str(), new.as_str()]
            }
            GitCommand::Merge { source } => vec!["merge", source.as_str()],
            GitCommand::RemoteAdd(remote) => vec!["remote", "add", remote.name(), remote.url()],
            GitCommand::RemoteList => vec!["remote"],
            GitCommand::BranchList => vec!["branch", "--list"],
            GitCommand::CurrentBranch => vec!["branch", "--show-current"],
            GitCommand::History => vec!["log", "--oneline", "--graph", "--all"],
            GitCommand::FreeForm(tokens) => tokens.iter().map(String::as_str).collect(),
        };

        args.into_iter().map(str::to_string).collect()
    }

    pub fn request(&self, working_directory: &Path) -> CommandRequest {
        CommandRequest::git(working_directory, self.args())
    }
}

impl std::fmt::Display for GitCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", GIT_EXECUTABLE, self.args().join(" "))
    }
}

use crate::artifacts::runner::command_error::CommandError;

/// Failure of a repository operation.
///
/// Rejections (`InvalidInput`, `Rejected`, `BranchExists`, `UnknownBranch`)
/// guarantee that the requested git command was never started. Only the
/// read-only branch listing may have run to decide them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("rejected command: {0}")]
    Rejected(String),
    #[error("branch '{0}' already exists")]
    BranchExists(String),
    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),
    #[error("'{step}' failed")]
    Step {
        step: String,
        #[source]
        source: CommandError,
    },
    #[error(
        "checked out '{target}' but merging '{merged}' did not complete, \
        repository left on '{target}'"
    )]
    PartialMerge {
        target: String,
        merged: String,
        #[source]
        source: CommandError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub fn step(step: impl Into<String>, source: CommandError) -> Self {
        RepositoryError::Step {
            step: step.into(),
            source,
        }
    }

    /// The underlying command failure, if a process was involved.
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            RepositoryError::Step { source, .. } | RepositoryError::PartialMerge { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }

    /// True when the error was raised before the requested command was spawned.
    pub fn is_rejected_before_spawn(&self) -> bool {
        matches!(
            self,
            RepositoryError::InvalidInput(_)
                | RepositoryError::Rejected(_)
                | RepositoryError::BranchExists(_)
                | RepositoryError::UnknownBranch(_)
        )
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

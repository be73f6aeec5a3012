use crate::artifacts::runner::GIT_EXECUTABLE;
use std::path::{Path, PathBuf};

/// A single invocation of an external executable.
///
/// Arguments are kept as a discrete vector and handed to the process as-is,
/// never joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    working_directory: PathBuf,
    executable: String,
    arguments: Vec<String>,
}

impl CommandRequest {
    pub fn new<I, S>(working_directory: impl Into<PathBuf>, executable: &str, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandRequest {
            working_directory: working_directory.into(),
            executable: executable.to_string(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn git<I, S>(working_directory: impl Into<PathBuf>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(working_directory, GIT_EXECUTABLE, arguments)
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Checks that the working directory is non-empty and points to an
    /// existing directory.
    pub fn has_valid_working_directory(&self) -> bool {
        !self.working_directory.as_os_str().is_empty() && self.working_directory.is_dir()
    }
}

impl std::fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable)?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        Ok(())
    }
}

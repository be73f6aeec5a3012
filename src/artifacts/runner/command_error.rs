use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("working directory is empty or does not exist: {0:?}")]
    InvalidWorkingDirectory(PathBuf),
    #[error("failed to launch '{executable}': {reason}")]
    ProcessLaunchFailed { executable: String, reason: String },
    #[error("command exited with status {exit_code}: {}", failure_text(.stderr, .stdout))]
    NonZeroExit {
        exit_code: i32,
        stderr: String,
        stdout: String,
    },
    #[error("command timed out after {0:?}")]
    Timeout(Duration),
}

impl CommandError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::NonZeroExit { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    pub fn stderr(&self) -> Option<&str> {
        match self {
            CommandError::NonZeroExit { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

// some git failures (e.g. "nothing to commit") only explain themselves on stdout
fn failure_text<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    match stderr.trim() {
        "" => stdout.trim(),
        stderr => stderr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_displays_stderr() {
        let error = CommandError::NonZeroExit {
            exit_code: 128,
            stderr: "fatal: not a git repository\n".to_string(),
            stdout: String::new(),
        };

        assert_eq!(
            error.to_string(),
            "command exited with status 128: fatal: not a git repository"
        );
        assert_eq!(error.exit_code(), Some(128));
    }

    #[test]
    fn non_zero_exit_falls_back_to_stdout() {
        let error = CommandError::NonZeroExit {
            exit_code: 1,
            stderr: String::new(),
            stdout: "nothing to commit, working tree clean\n".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "command exited with status 1: nothing to commit, working tree clean"
        );
    }

    #[test]
    fn launch_failure_has_no_exit_code() {
        let error = CommandError::ProcessLaunchFailed {
            executable: "git".to_string(),
            reason: "No such file or directory".to_string(),
        };

        assert_eq!(error.exit_code(), None);
        assert_eq!(error.stderr(), None);
    }
}

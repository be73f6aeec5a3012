/// Captured outcome of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandResult {
    pub fn from_output(output: &std::process::Output) -> Self {
        CommandResult {
            // terminated by a signal
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

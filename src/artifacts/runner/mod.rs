//! External command execution
//!
//! - `command_request`: executable, argument vector and working directory of one call
//! - `command_result`: exit code and captured output of a finished call
//! - `command_error`: typed failures (launch, non-zero exit, timeout)
//! - `command_runner`: the single-flight async runner built on `tokio::process`

pub mod command_error;
pub mod command_request;
pub mod command_result;
pub mod command_runner;

pub const GIT_EXECUTABLE: &str = "git";

//! Porcelain commands (user-facing operations)
//!
//! Each command validates its inputs, issues one git invocation (merge issues
//! two) and forwards git's output unchanged.
//!
//! ## Commands
//!
//! - `init`: Create a repository
//! - `add`: Stage everything
//! - `commit`: Record staged changes
//! - `push`: Push a branch to origin, optionally forced
//! - `sync`: Pull and fetch
//! - `status`: Show working tree status
//! - `branch`: Create, delete, rename and list branches
//! - `checkout`: Switch to an existing branch
//! - `merge`: Check out a target branch and merge a source branch into it
//! - `remote`: Add and list remotes
//! - `log`: Show the commit graph
//! - `exec`: Run a free-form git command line
//! - `shell`: Read and run free-form command lines interactively

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod exec;
pub mod init;
pub mod log;
pub mod merge;
pub mod push;
pub mod remote;
pub mod shell;
pub mod status;
pub mod sync;

//! Building blocks shared by the commands
//!
//! - `branch`: branch names and `git branch --list` parsing
//! - `core`: shared utilities (errors, pager wrapper)
//! - `remote`: remote names/urls and `git remote` parsing
//! - `runner`: external command execution and its result/error types
//! - `vocabulary`: the git commands the front-end issues

pub mod branch;
pub mod core;
pub mod remote;
pub mod runner;
pub mod vocabulary;

//! Remotes
//!
//! - `remote_list`: parsing of `git remote` output
//! - `remote_spec`: validated name/url pair for `git remote add`

pub mod remote_list;
pub mod remote_spec;

pub const DEFAULT_REMOTE: &str = "origin";

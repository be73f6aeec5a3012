//! Branch names and branch listings
//!
//! - `branch_name`: validated branch names following git's ref-name rules
//! - `branch_list`: parsing of `git branch --list` output

pub mod branch_list;
pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const CURRENT_BRANCH_MARKER: char = '*';

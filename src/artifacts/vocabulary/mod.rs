//! Mapping from user inputs to git argument vectors
//!
//! - `git_command`: one variant per supported feature, validated on construction
//! - `free_form`: typed command lines restricted to the git executable

pub mod free_form;
pub mod git_command;

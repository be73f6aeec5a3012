//! Repository binding
//!
//! - `repository`: working directory, output writer and command runner shared
//!   by every operation

pub mod repository;

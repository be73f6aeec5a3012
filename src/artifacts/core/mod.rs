//! Core utilities and shared types
//!
//! - `error`: errors raised by repository operations
//! - `logging`: tracing subscriber setup for the binary
//! - `pager`: `Write` adapter over the minus pager for long output

pub mod error;
pub mod logging;
pub mod pager;

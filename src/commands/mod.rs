//! Git operations exposed by the front-end
//!
//! - `plumbing`: queries other operations build on (branch and remote listings,
//!   current branch), returning parsed values without printing
//! - `porcelain`: user-facing features, one git invocation each (merge issues two),
//!   forwarding git's output as-is

pub mod plumbing;
pub mod porcelain;

//! Recursive, cycle-safe structure dumping
//!
//! Classification, single-line formatting, the traversal engine, and the
//! public [`Dumper`] with its configuration.

pub mod classify;
pub mod config;
pub mod dumper;
mod engine;
pub mod format;

pub use config::{ContainedPolicy, MaxDepth};
pub use dumper::{dump, dump_to_string, Dumper};

//! Dumptree - nested, cycle-safe structure dumping
//!
//! Dumptree renders arbitrary values (atoms, sequences, mappings, composite
//! objects) in a nicely nested, easy-to-read form. Recursive structures are
//! handled through identity-based cycle detection, depth is caller-bounded,
//! small simple aggregates collapse to a single line, and contained composite
//! objects can be suppressed by a locality policy.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod dump;
pub mod value;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use dump::config::{
    default_max_depth, default_policy, set_default_max_depth, set_default_policy,
};
pub use dump::format::display_or_placeholder;
pub use dump::{dump, dump_to_string, ContainedPolicy, Dumper, MaxDepth};
pub use value::{Key, ObjectFields, ObjectId, Value};

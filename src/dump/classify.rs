//! Value classification
//!
//! Pure, total, infallible: every value falls into exactly one [`Category`],
//! and `is_short` decides single-line eligibility.

use crate::value::{Key, Value};

/// Maximum element count for a sequence to qualify as short.
pub const SHORT_SEQ_MAX: usize = 10;

/// Maximum entry count for a mapping to qualify as short.
pub const SHORT_MAP_MAX: usize = 5;

/// The four value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Null, booleans, numbers, strings.
    Atomic,
    /// Ordered, index-addressed collections.
    Sequence,
    /// Key/value collections.
    Mapping,
    /// Objects with named fields.
    Composite,
}

/// Classify a value by its runtime shape.
#[must_use]
pub const fn classify(value: &Value) -> Category {
    match value {
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            Category::Atomic
        }
        Value::Seq(_) => Category::Sequence,
        Value::Map(_) => Category::Mapping,
        Value::Object(_) => Category::Composite,
    }
}

/// Whether a value renders on a single line.
///
/// Atoms always do. A sequence is short when it has at most
/// [`SHORT_SEQ_MAX`] elements, all atomic; a mapping when it has at most
/// [`SHORT_MAP_MAX`] entries with comparable atomic keys and atomic values.
/// Composite objects never are.
#[must_use]
pub fn is_short(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => true,
        Value::Seq(items) => {
            let items = items.borrow();
            items.len() <= SHORT_SEQ_MAX
                && items.iter().all(|item| classify(item) == Category::Atomic)
        }
        Value::Map(entries) => {
            let entries = entries.borrow();
            entries.len() <= SHORT_MAP_MAX
                && entries.iter().all(|(key, val)| {
                    !matches!(key, Key::Other(_)) && classify(val) == Category::Atomic
                })
        }
        Value::Object(_) => false,
    }
}

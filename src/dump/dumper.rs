//! The public dumper
//!
//! A [`Dumper`] owns its configuration and output sink; every `dump` call
//! runs with fresh traversal state, so cycles and identities never leak
//! between calls.

use std::io;

use anyhow::Result;

use crate::dump::config::{self, ContainedPolicy, MaxDepth};
use crate::dump::engine::Traversal;
use crate::value::Value;

/// Writes nested, cycle-safe renderings of values to an owned sink.
///
/// Options left unset resolve against the process-wide defaults once, at
/// construction; later changes to the defaults do not affect an existing
/// dumper. Not safe for concurrent use from several threads.
pub struct Dumper<W = io::Stdout> {
    max_depth: MaxDepth,
    policy: ContainedPolicy,
    out: W,
}

impl Dumper<io::Stdout> {
    /// A dumper writing to standard output with the process defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for Dumper<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: io::Write> Dumper<W> {
    /// A dumper writing to the given sink with the process defaults.
    pub fn with_sink(out: W) -> Self {
        Self {
            max_depth: config::default_max_depth(),
            policy: config::default_policy(),
            out,
        }
    }

    /// Override the depth bound.
    #[must_use]
    pub fn max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the contained-instance policy.
    #[must_use]
    pub fn policy(mut self, policy: ContainedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render one value to the sink.
    ///
    /// Traversal itself cannot fail on well-formed input; errors only come
    /// from the sink.
    pub fn dump(&mut self, value: &Value) -> Result<()> {
        let mut traversal = Traversal::new(self.max_depth, self.policy, &mut self.out);
        traversal.visit_root(value)
    }

    /// Recover the owned sink, consuming the dumper.
    pub fn into_sink(self) -> W {
        self.out
    }
}

/// Render a value to standard output with the process defaults.
pub fn dump(value: &Value) -> Result<()> {
    Dumper::new().dump(value)
}

/// Render one or more values to an in-memory sink and return the accumulated
/// text, for callers that want the string rather than a side effect.
#[must_use]
pub fn dump_to_string(values: &[Value]) -> String {
    let mut dumper = Dumper::with_sink(Vec::new());
    for value in values {
        // Writes into a Vec cannot fail.
        let _ = dumper.dump(value);
    }
    String::from_utf8_lossy(&dumper.into_sink()).into_owned()
}

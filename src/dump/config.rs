//! Dumper configuration
//!
//! The contained-instance policy, the depth bound, and the process-wide
//! defaults that a dumper falls back to when an option is left unset.
//! Defaults are resolved once at construction time.

use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use anyhow::{bail, Error};

/// Policy for composite objects nested inside another composite object.
///
/// Evaluated against the immediate container only. `None` suppresses every
/// contained instance, `Module` requires an exact defining-module match,
/// `Package` requires matching module paths with their final segment dropped,
/// and `All` never suppresses on locality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainedPolicy {
    /// Never expand contained instances.
    None,
    /// Expand only instances from the same defining module.
    Module,
    /// Expand only instances from the same package.
    Package,
    /// Always expand (depth and cycle checks still apply).
    All,
}

impl FromStr for ContainedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "module" => Ok(Self::Module),
            "package" => Ok(Self::Package),
            "all" => Ok(Self::All),
            other => bail!(
                "Unknown contained-instance policy '{other}': expected none, module, package, or all"
            ),
        }
    }
}

impl fmt::Display for ContainedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Module => "module",
            Self::Package => "package",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

/// Depth bound for the traversal: a concrete limit or unbounded.
///
/// Cycle detection makes unbounded traversal safe even on cyclic graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    /// No depth limit.
    Unbounded,
    /// Expand at most this many nesting levels.
    Limit(usize),
}

impl MaxDepth {
    /// Whether an expandable value entered at `depth` is past the bound.
    #[must_use]
    pub fn exceeded_by(self, depth: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Limit(limit) => depth > limit,
        }
    }
}

impl FromStr for MaxDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("unlimited") || s.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        match s.parse::<usize>() {
            Ok(limit) => Ok(Self::Limit(limit)),
            Err(_) => bail!("Invalid max depth '{s}': expected a non-negative integer or 'unlimited'"),
        }
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unlimited"),
            Self::Limit(limit) => write!(f, "{limit}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Defaults {
    max_depth: MaxDepth,
    policy: ContainedPolicy,
}

/// Process-wide defaults, consulted once when a dumper is constructed
/// without an explicit setting. Shared mutable state kept behind a lock as
/// an escape hatch for quick interactive debugging; dumpers built before a
/// change keep the values they resolved.
static DEFAULTS: RwLock<Defaults> = RwLock::new(Defaults {
    max_depth: MaxDepth::Limit(5),
    policy: ContainedPolicy::Module,
});

fn defaults() -> Defaults {
    // A poisoned lock only means another thread panicked mid-write of a Copy
    // pair; the stored values are still usable.
    *DEFAULTS.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn defaults_mut() -> impl std::ops::DerefMut<Target = Defaults> {
    DEFAULTS
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// The process-wide default depth bound.
#[must_use]
pub fn default_max_depth() -> MaxDepth {
    defaults().max_depth
}

/// Replace the process-wide default depth bound.
pub fn set_default_max_depth(max_depth: MaxDepth) {
    defaults_mut().max_depth = max_depth;
}

/// The process-wide default contained-instance policy.
#[must_use]
pub fn default_policy() -> ContainedPolicy {
    defaults().policy
}

/// Replace the process-wide default contained-instance policy.
pub fn set_default_policy(policy: ContainedPolicy) {
    defaults_mut().policy = policy;
}

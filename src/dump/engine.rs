//! Recursive dump traversal
//!
//! Depth-first, pre-order walk over a [`Value`] graph with identity-based
//! cycle detection, a depth bound that short values bypass, and the
//! contained-instance policy for composites nested in composites. All state
//! lives in a per-call [`Traversal`], so one dumper can be reused across
//! calls without carrying stale state over.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};

use crate::dump::classify::is_short;
use crate::dump::config::{ContainedPolicy, MaxDepth};
use crate::dump::format::{short_form, summary_header};
use crate::value::{Key, ObjectFields, ObjectId, Value};

const INDENT: &str = "  ";

const TOO_DEEP: &str = "contents suppressed (too deep)";
const ALREADY_SEEN: &str = "object already seen";
const SUPPRESSED_CONTAINED: &str = "object contents suppressed (contained instance)";
const SUPPRESSED_PACKAGE: &str = "object contents suppressed (instance from different package)";
const SUPPRESSED_MODULE: &str = "object contents suppressed (instance from different module)";
const UNSORTABLE_KEYS: &str = "note: keys unsortable, using insertion order";

/// One traversal: owned by a single top-level dump call and discarded at its
/// end.
pub(crate) struct Traversal<'a, W: Write> {
    max_depth: MaxDepth,
    policy: ContainedPolicy,
    out: &'a mut W,
    /// Identities already rendered; the sole cycle-breaking mechanism.
    seen: HashSet<ObjectId>,
    /// Defining modules of the composites currently being expanded. The
    /// policy compares against the top entry only.
    containers: Vec<String>,
}

impl<'a, W: Write> Traversal<'a, W> {
    pub(crate) fn new(max_depth: MaxDepth, policy: ContainedPolicy, out: &'a mut W) -> Self {
        Self {
            max_depth,
            policy,
            out,
            seen: HashSet::new(),
            containers: Vec::new(),
        }
    }

    pub(crate) fn visit_root(&mut self, value: &Value) -> Result<()> {
        self.visit(value, 0, 0, true)
    }

    /// Visit one value. `depth` counts expandable nesting levels entered so
    /// far, `level` is the cosmetic indent, and `with_header` says whether
    /// this node still owes its own header line (false when the parent put
    /// the header on its key/index line).
    fn visit(&mut self, value: &Value, depth: usize, level: usize, with_header: bool) -> Result<()> {
        // Short values bypass the depth and cycle checks entirely. This
        // deliberately lets short content sit one level past the bound.
        if is_short(value) {
            return self.line(level, &short_form(value));
        }

        let depth = depth + 1;
        if self.max_depth.exceeded_by(depth) {
            return self.line(level, TOO_DEEP);
        }

        if let Some(id) = value.identity() {
            if !self.seen.insert(id) {
                return self.line(level, ALREADY_SEEN);
            }
        }

        match value {
            Value::Seq(items) => {
                let level = self.header(value, level, with_header)?;
                let items = items.borrow();
                for (index, item) in items.iter().enumerate() {
                    self.entry(&index.to_string(), item, depth, level)?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                let level = self.header(value, level, with_header)?;
                let entries = entries.borrow();
                for index in self.sorted_order(&entries, level)? {
                    let (key, val) = &entries[index];
                    self.entry(&key.label(), val, depth, level)?;
                }
                Ok(())
            }
            Value::Object(object) => {
                self.visit_object(value, object.as_ref(), depth, level, with_header)
            }
            // Atoms are always short and returned above.
            atom => self.line(level, &short_form(atom)),
        }
    }

    fn visit_object(
        &mut self,
        value: &Value,
        object: &dyn ObjectFields,
        depth: usize,
        level: usize,
        with_header: bool,
    ) -> Result<()> {
        let level = self.header(value, level, with_header)?;

        if let Some(diagnostic) = self.suppression_for(object) {
            return self.line(level, diagnostic);
        }

        self.containers.push(object.defining_module().to_string());
        let shallow = object.shallow_fields().to_vec();
        for (name, field) in object.fields() {
            if shallow.contains(&name.as_str()) {
                // Shallow fields never descend: inline form or bare header.
                let rendered = if is_short(&field) {
                    short_form(&field)
                } else {
                    summary_header(&field)
                };
                self.line(level, &format!("{name}: {rendered}"))?;
            } else {
                self.entry(&name, &field, depth, level)?;
            }
        }
        self.containers.pop();
        Ok(())
    }

    /// Render one child entry: inline when short, otherwise the child's
    /// header on the labeled line followed by its body one level deeper.
    fn entry(&mut self, label: &str, value: &Value, depth: usize, level: usize) -> Result<()> {
        if is_short(value) {
            self.line(level, &format!("{label}: {}", short_form(value)))
        } else {
            self.line(level, &format!("{label}: {}", summary_header(value)))?;
            self.visit(value, depth, level + 1, false)
        }
    }

    /// Sorted key order when every key is comparable; first-seen order plus
    /// an inline diagnostic note otherwise.
    fn sorted_order(&mut self, entries: &[(Key, Value)], level: usize) -> Result<Vec<usize>> {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        let sortable = entries
            .iter()
            .all(|(key, _)| !matches!(key, Key::Other(_)));
        if sortable {
            order.sort_by(|&a, &b| {
                entries[a]
                    .0
                    .try_cmp(&entries[b].0)
                    .unwrap_or(Ordering::Equal)
            });
        } else {
            self.line(level, UNSORTABLE_KEYS)?;
        }
        Ok(order)
    }

    /// Diagnostic line for a composite the policy refuses to expand, or
    /// `None` to proceed. Only applies while another composite is being
    /// expanded; the comparison uses the immediate container.
    fn suppression_for(&self, object: &dyn ObjectFields) -> Option<&'static str> {
        let container = self.containers.last()?;
        match self.policy {
            ContainedPolicy::All => None,
            ContainedPolicy::None => Some(SUPPRESSED_CONTAINED),
            ContainedPolicy::Package => {
                if package_of(object.defining_module()) == package_of(container) {
                    None
                } else {
                    Some(SUPPRESSED_PACKAGE)
                }
            }
            ContainedPolicy::Module => {
                if object.defining_module() == container {
                    None
                } else {
                    Some(SUPPRESSED_MODULE)
                }
            }
        }
    }

    /// Write the node's header when it still owes one; returns the level its
    /// children indent at.
    fn header(&mut self, value: &Value, level: usize, with_header: bool) -> Result<usize> {
        if with_header {
            self.line(level, &summary_header(value))?;
            Ok(level + 1)
        } else {
            Ok(level)
        }
    }

    fn line(&mut self, level: usize, text: &str) -> Result<()> {
        writeln!(self.out, "{}{text}", INDENT.repeat(level))
            .context("Failed to write to output sink")
    }
}

/// Module path with its final segment dropped: `app::models` -> `app`.
/// Single-segment modules share the empty package.
fn package_of(module: &str) -> &str {
    module.rfind("::").map_or("", |split| &module[..split])
}

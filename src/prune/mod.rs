//! Pruning engine for task definitions.
//!
//! A record is pruned against a [`RuleTable`](crate::rules::RuleTable) in
//! three passes, always in this order:
//! 1. keys listed as ignored are removed whatever their value
//! 2. keys with a `null` default are removed when they are `null`
//! 3. keys with an empty-list default are removed when they are `[]`
//!
//! Every removal is reported as a [`Removal`] so callers decide where the
//! notice goes. Pruning never fails on a record; only the document shape
//! (see [`prune_document`]) can be rejected.

mod document;
mod record;


use std::fmt;

pub use document::prune_document;
pub use record::prune_record;

/// Why a key was removed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The key is never accepted back by the API.
    Ignored,
    /// The key held `null`, which is its default.
    NullDefault,
    /// The key held an empty array, which is its default.
    EmptyListDefault,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalReason::Ignored => write!(f, "it's ignored"),
            RemovalReason::NullDefault => write!(f, "it's the default (`null`)"),
            RemovalReason::EmptyListDefault => write!(f, "it's the default (`[]`)"),
        }
    }
}

/// A single key removed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub key: &'static str,
    pub reason: RemovalReason,
}

impl Removal {
    pub fn new(key: &'static str, reason: RemovalReason) -> Self {
        Self { key, reason }
    }
}

/// Renders the diagnostic line, e.g. ``Removing cpu as it's the default (`null`)``.
impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Removing {} as {}", self.key, self.reason)
    }
}

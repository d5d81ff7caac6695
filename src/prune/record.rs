//! Single-record pruning.

use super::{Removal, RemovalReason};
use crate::rules::RuleTable;
use serde_json::{Map, Value};

/// Prune `record` in place according to `rules`.
///
/// Returns the removals in the order they happened. Keys the table does not
/// mention are never touched, and a key whose value does not match its
/// default (`0`, `false`, `""`, a non-empty array, ...) is kept.
pub fn prune_record(record: &mut Map<String, Value>, rules: &RuleTable) -> Vec<Removal> {
    let mut removals = Vec::new();

    for &key in rules.ignored {
        if record.remove(key).is_some() {
            removals.push(Removal::new(key, RemovalReason::Ignored));
        }
    }

    for &key in rules.null_default {
        if record.get(key).is_some_and(Value::is_null) {
            record.remove(key);
            removals.push(Removal::new(key, RemovalReason::NullDefault));
        }
    }

    // Only real arrays count: an empty string or object is not the default.
    for &key in rules.empty_list_default {
        if record
            .get(key)
            .and_then(Value::as_array)
            .is_some_and(|items| items.is_empty())
        {
            record.remove(key);
            removals.push(Removal::new(key, RemovalReason::EmptyListDefault));
        }
    }

    removals
}

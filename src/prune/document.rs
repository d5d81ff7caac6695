//! Whole-document pruning: the task definition and its container definitions.

use super::{Removal, prune_record};
use crate::error::{CleanError, Result};
use crate::rules::{CONTAINER_DEFINITION, CONTAINER_DEFINITIONS_FIELD, TASK_DEFINITION};
use serde_json::{Map, Value};

/// Prune a parsed task definition in place.
///
/// The root is pruned with the task definition rules, then every element of
/// `containerDefinitions` with the container definition rules. Fails with
/// [`CleanError::Structure`] when the root is not an object, when
/// `containerDefinitions` is missing or not an array, or when one of its
/// elements is not an object.
///
/// `report` sees each record's removals as soon as that record is pruned, so
/// removals made before a structure error are still reported.
pub fn prune_document(
    document: &mut Value,
    mut report: impl FnMut(&Removal),
) -> Result<Vec<Removal>> {
    let kind = value_kind(document);
    let root = document.as_object_mut().ok_or_else(|| {
        CleanError::Structure(format!("expected an object at the root, found {}", kind))
    })?;

    let mut removals = prune_record(root, &TASK_DEFINITION);
    removals.iter().for_each(&mut report);

    for (index, container) in container_definitions(root)?.iter_mut().enumerate() {
        let kind = value_kind(container);
        let record = container.as_object_mut().ok_or_else(|| {
            CleanError::Structure(format!(
                "`{}[{}]` is {}, expected an object",
                CONTAINER_DEFINITIONS_FIELD, index, kind
            ))
        })?;
        let container_removals = prune_record(record, &CONTAINER_DEFINITION);
        container_removals.iter().for_each(&mut report);
        removals.extend(container_removals);
    }

    Ok(removals)
}

fn container_definitions(root: &mut Map<String, Value>) -> Result<&mut Vec<Value>> {
    match root.get_mut(CONTAINER_DEFINITIONS_FIELD) {
        Some(Value::Array(containers)) => Ok(containers),
        Some(other) => Err(CleanError::Structure(format!(
            "`{}` is {}, expected an array",
            CONTAINER_DEFINITIONS_FIELD,
            value_kind(other)
        ))),
        None => Err(CleanError::Structure(format!(
            "missing `{}`",
            CONTAINER_DEFINITIONS_FIELD
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

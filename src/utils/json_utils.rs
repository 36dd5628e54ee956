use anyhow::{Context, Result};
use json_patch::Patch;
use serde_json::Value as JsonValue;

pub fn apply_patch(document: &JsonValue, operations: &Patch) -> Result<JsonValue> {
    let mut patched = document.clone();
    json_patch::patch(&mut patched, operations).context("Failed to apply JSON patch")?;
    Ok(patched)
}

pub fn apply_merge_patch(document: &JsonValue, merge_patch: &JsonValue) -> JsonValue {
    let mut merged = document.clone();
    json_patch::merge(&mut merged, merge_patch);
    merged
}

/// Objects and arrays are structures; everything else is a scalar.
pub fn is_structure(value: &JsonValue) -> bool {
    value.is_object() || value.is_array()
}

/// Nesting depth of a value: scalars are 0, an empty object or array is 1.
pub fn depth(value: &JsonValue) -> usize {
    match value {
        JsonValue::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        JsonValue::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
#[path = "json_utils_tests.rs"]
mod tests;

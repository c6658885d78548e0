//! Shallow predicates and lookups.

use serde_json::Value;

use crate::types::Operand;

/// True for map-like values: JSON objects and schema objects.
pub fn is_object(operand: Operand<'_>) -> bool {
    matches!(
        operand,
        Operand::Json(Value::Object(_)) | Operand::Schema(_)
    )
}

pub fn is_function(operand: Operand<'_>) -> bool {
    matches!(operand, Operand::Callable(_))
}

pub fn is_regex(operand: Operand<'_>) -> bool {
    matches!(operand, Operand::Pattern(_))
}

/// True if the value is a map with at least one key.
pub fn has_properties(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

/// First element of an array.
///
/// Strings, maps and scalars have no first element.
pub fn first(value: &Value) -> Option<&Value> {
    value.as_array().and_then(|items| items.first())
}

/// True if `key` is a key of any map nested anywhere inside `value`.
pub fn has_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(key) || map.values().any(|child| has_key(child, key))
        }
        Value::Array(items) => items.iter().any(|item| has_key(item, key)),
        _ => false,
    }
}

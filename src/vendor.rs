//! Vendor extension (`x-*`) handling.

use serde_json::{Map, Value};

use crate::types::VENDOR_EXTENSION_PREFIX;

/// True for `x-` keys with a non-empty suffix.
pub fn is_vendor_extension(key: &str) -> bool {
    key.strip_prefix(VENDOR_EXTENSION_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty())
}

/// The vendor extension entries of a map, in order.
pub fn vendor_extensions(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| is_vendor_extension(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy `target` and overlay the vendor extensions found in `source`.
///
/// Source values win on conflict. A `null` target stays `null`; a `null`
/// or non-object source leaves the target as it was.
pub fn assign_vendor_extensions(target: &Value, source: &Value) -> Value {
    let Value::Object(target_map) = target else {
        return target.clone();
    };
    let Value::Object(source_map) = source else {
        return target.clone();
    };

    let mut result = target_map.clone();
    for (key, value) in vendor_extensions(source_map) {
        result.insert(key, value);
    }
    Value::Object(result)
}

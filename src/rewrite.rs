//! Structural rewrites over maps and nested values.
//!
//! Every function builds a new value; inputs are only borrowed.

use serde_json::{Map, Value};

use crate::types::PRESERVED_EMPTY_KEYS;

/// True for `null`, `[]` and `{}`.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Copy of `map` without its empty properties.
///
/// `example` and `default` are kept even when empty. Only the top level is
/// pruned.
pub fn delete_empty_properties(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(key, value)| {
            PRESERVED_EMPTY_KEYS.contains(&key.as_str()) || !is_empty_value(value)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Rename every `from` key at any depth to `to`, or delete it when `to` is `None`.
///
/// The renamed entry keeps its position. If a sibling already uses `to`,
/// the renamed value replaces it. Scalars pass through unchanged.
pub fn find_and_rename_key(value: &Value, from: &str, to: Option<&str>) -> Value {
    match value {
        Value::Object(map) => Value::Object(rename_in_object(map, from, to)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| find_and_rename_key(item, from, to))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Copy of `map` holding only the keys listed in `keep`.
///
/// Despite the name this is a pick: listed keys stay, the rest go.
pub fn remove_props<S: AsRef<str>>(map: &Map<String, Value>, keep: &[S]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| keep.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

// --- Internal implementation ---

fn rename_in_object(map: &Map<String, Value>, from: &str, to: Option<&str>) -> Map<String, Value> {
    let renames = map.contains_key(from);
    let mut result = Map::new();

    for (key, child) in map {
        let child = find_and_rename_key(child, from, to);

        if key == from {
            if let Some(to) = to {
                result.insert(to.to_string(), child);
            }
            continue;
        }

        // Displaced by the renamed entry
        if renames && Some(key.as_str()) == to {
            continue;
        }

        result.insert(key.clone(), child);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn delete_empty_properties_removes_empty_values() {
        assert_eq!(delete_empty_properties(&obj(json!({}))), obj(json!({})));
        assert_eq!(
            delete_empty_properties(&obj(json!({ "name": "test" }))),
            obj(json!({ "name": "test" }))
        );
        assert_eq!(delete_empty_properties(&obj(json!({ "name": null }))), Map::new());
        assert_eq!(delete_empty_properties(&obj(json!({ "name": [] }))), Map::new());
        assert_eq!(delete_empty_properties(&obj(json!({ "name": {} }))), Map::new());
    }

    #[test]
    fn delete_empty_properties_keeps_example_and_default() {
        let input = obj(json!({ "example": [], "default": {}, "other": [] }));
        assert_eq!(
            delete_empty_properties(&input),
            obj(json!({ "example": [], "default": {} }))
        );
    }

    #[test]
    fn delete_empty_properties_is_shallow() {
        let input = obj(json!({ "a": { "b": null }, "c": 0, "d": false, "e": "" }));
        assert_eq!(delete_empty_properties(&input), input);
    }

    #[test]
    fn find_and_rename_key_pass_through() {
        assert_eq!(find_and_rename_key(&json!({}), "x", Some("y")), json!({}));
        assert_eq!(find_and_rename_key(&json!([]), "x", Some("y")), json!([]));
        assert_eq!(find_and_rename_key(&json!(null), "x", Some("y")), json!(null));
        assert_eq!(find_and_rename_key(&json!(3), "x", Some("y")), json!(3));
    }

    #[test]
    fn find_and_rename_key_renames_at_every_depth() {
        let input = json!({ "x": 1, "a": { "x": 2, "b": [{ "x": 3 }] } });
        assert_eq!(
            find_and_rename_key(&input, "x", Some("y")),
            json!({ "y": 1, "a": { "y": 2, "b": [{ "y": 3 }] } })
        );
    }

    #[test]
    fn find_and_rename_key_keeps_position() {
        let input = json!({ "a": 1, "x": 2, "z": 3 });
        let result = find_and_rename_key(&input, "x", Some("y"));
        let keys: Vec<&str> = result
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["a", "y", "z"]);
    }

    #[test]
    fn find_and_rename_key_deletes_when_target_is_none() {
        assert_eq!(find_and_rename_key(&json!({ "x": 1 }), "x", None), json!({}));
        assert_eq!(
            find_and_rename_key(&json!({ "x": 1, "z": 2 }), "x", None),
            json!({ "z": 2 })
        );
    }

    #[test]
    fn find_and_rename_key_renamed_value_wins_over_sibling() {
        let input = json!({ "y": "old", "x": "new" });
        assert_eq!(
            find_and_rename_key(&input, "x", Some("y")),
            json!({ "y": "new" })
        );
    }

    #[test]
    fn find_and_rename_key_same_key_is_noop() {
        let input = json!({ "x": 1, "a": [{ "x": { "x": 2 } }] });
        assert_eq!(find_and_rename_key(&input, "x", Some("x")), input);
    }

    #[test]
    fn find_and_rename_key_does_not_mutate_input() {
        let input = json!({ "x": { "x": 1 } });
        let before = input.clone();
        let _ = find_and_rename_key(&input, "x", None);
        assert_eq!(input, before);
    }

    #[test]
    fn remove_props_picks_listed_keys() {
        let input = obj(json!({ "a": 1, "b": 2 }));
        assert_eq!(remove_props(&input, &["a"]), obj(json!({ "a": 1 })));
        assert_eq!(remove_props(&input, &["a", "b"]), input);
        assert_eq!(remove_props(&input, &["c"]), Map::new());
        assert_eq!(remove_props(&Map::new(), &["b"]), Map::new());
    }
}

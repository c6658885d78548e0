//! Sequence helpers.

use serde_json::Value;

/// New vector with every element equal to `value` moved to the front.
///
/// Relative order is otherwise preserved. With no `value`, or one that is
/// not present, the result equals the input.
pub fn sort_first_item<T: Clone + PartialEq>(items: &[T], value: Option<&T>) -> Vec<T> {
    let Some(value) = value else {
        return items.to_vec();
    };

    let (mut front, rest): (Vec<T>, Vec<T>) =
        items.iter().cloned().partition(|item| item == value);
    front.extend(rest);
    front
}

/// Replace every array element equal to `needle` with `replacement`.
///
/// `None` in, `None` out; `null` in, `null` out. A missing or `null`
/// needle or replacement leaves the array as it was.
pub fn replace_value(
    items: Option<&Value>,
    needle: Option<&Value>,
    replacement: Option<&Value>,
) -> Option<Value> {
    let items = items?;

    let (Some(needle), Some(replacement)) = (needle, replacement) else {
        return Some(items.clone());
    };
    if needle.is_null() || replacement.is_null() {
        return Some(items.clone());
    }

    match items {
        Value::Array(arr) => Some(Value::Array(
            arr.iter()
                .map(|item| {
                    if item == needle {
                        replacement.clone()
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )),
        other => Some(other.clone()),
    }
}

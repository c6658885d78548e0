//! Naming and path helpers for route descriptors.

use crate::types::PathReplacement;

/// Lower-case the whole string, then upper-case its first character.
///
/// `"test Test"` becomes `"Test test"`; this is not per-word title case.
pub fn to_title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build an operation id from an HTTP method and a route path.
///
/// e.g. `PUT v1/sum/add/{a}/{b}` -> `putV1SumAddAB`
pub fn create_id(method: &str, path: &str) -> String {
    let mut id = method.to_lowercase();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let cleaned = segment.replace(['{', '}'], "");
        let mut chars = cleaned.chars();
        if let Some(head) = chars.next() {
            id.extend(head.to_uppercase());
            id.push_str(chars.as_str());
        }
    }
    id
}

/// Apply the path replacements that are active for `active_scopes`, in order.
///
/// Each rule rewrites every match in the output of the previous rule.
pub fn replace_in_path<S: AsRef<str>>(
    path: &str,
    active_scopes: &[S],
    rules: &[PathReplacement],
) -> String {
    rules
        .iter()
        .filter(|rule| rule.applies_to(active_scopes))
        .fold(path.to_string(), |current, rule| {
            let replaced = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
            if replaced != current {
                tracing::trace!(
                    scope = %rule.scope,
                    pattern = %rule.pattern,
                    from = %current,
                    to = %replaced,
                    "path replacement applied"
                );
            }
            replaced
        })
}

/// Drop a single trailing `/`, leaving the root path alone.
pub fn remove_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Append `name=value` to a URL's query string.
///
/// An empty `url` or `name` returns the URL unchanged.
pub fn append_query_string(url: &str, name: &str, value: &str) -> String {
    if url.is_empty() || name.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{name}={value}")
}

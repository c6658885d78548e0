//! Loading values and path-replacement configuration.
//!
//! Handles JSON from files and strings. The structural operations never
//! touch the filesystem; this is the only module that does.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConfigError, LoadError};
use crate::types::{json_type_name, PathReplacement};

/// Load a JSON value from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't valid JSON.
pub fn load_value(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_value_str(&content)
}

/// Load a JSON value from a string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON.
pub fn load_value_str(content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Compile path replacements from an already-parsed JSON array.
///
/// # Errors
///
/// Returns `ConfigError::InvalidRules` if `value` is not an array, or
/// `ConfigError::InvalidRule` naming the first entry that fails to load.
pub fn parse_path_replacements(value: &Value) -> Result<Vec<PathReplacement>, ConfigError> {
    let Some(entries) = value.as_array() else {
        return Err(ConfigError::InvalidRules {
            actual: json_type_name(value).to_string(),
        });
    };

    let rules = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            PathReplacement::deserialize(entry)
                .map_err(|source| ConfigError::InvalidRule { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = rules.len(), "loaded path replacements");
    Ok(rules)
}

/// Load path replacements from a JSON file.
///
/// # Errors
///
/// Returns `LoadError` for unreadable files, invalid JSON or invalid rules.
pub fn load_path_replacements(path: &Path) -> Result<Vec<PathReplacement>, LoadError> {
    let value = load_value(path)?;
    Ok(parse_path_replacements(&value)?)
}

/// Load path replacements from a JSON string.
///
/// # Errors
///
/// Returns `LoadError` for invalid JSON or invalid rules.
pub fn load_path_replacements_str(content: &str) -> Result<Vec<PathReplacement>, LoadError> {
    let value = load_value_str(content)?;
    Ok(parse_path_replacements(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_value_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"x-a": 1}}"#).unwrap();

        let value = load_value(file.path()).unwrap();
        assert_eq!(value["x-a"], 1);
    }

    #[test]
    fn load_value_file_not_found() {
        let result = load_value(Path::new("/nonexistent/path.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn load_value_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let result = load_value(file.path());
        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
    }

    #[test]
    fn load_value_str_invalid() {
        let result = load_value_str("not json");
        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
    }

    #[test]
    fn parse_path_replacements_valid() {
        let rules = parse_path_replacements(&json!([
            { "replaceIn": "all", "pattern": "v([0-9]+)/", "replacement": "" },
            { "replaceIn": "groups", "pattern": "[.].*$" }
        ]))
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].scope, "groups");
        assert_eq!(rules[1].replacement, "");
    }

    #[test]
    fn parse_path_replacements_not_array() {
        let result = parse_path_replacements(&json!({ "replaceIn": "all" }));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRules { actual }) if actual == "object"
        ));
    }

    #[test]
    fn parse_path_replacements_reports_index() {
        let result = parse_path_replacements(&json!([
            { "replaceIn": "all", "pattern": "ok" },
            { "replaceIn": "all", "pattern": "(" }
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidRule { index: 1, .. })));
    }

    #[test]
    fn parse_path_replacements_missing_pattern() {
        let result = parse_path_replacements(&json!([{ "replaceIn": "all" }]));
        assert!(matches!(result, Err(ConfigError::InvalidRule { index: 0, .. })));
    }

    #[test]
    fn load_path_replacements_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"replaceIn": "all", "pattern": "v([0-9]+)/", "replacement": ""}}]"#
        )
        .unwrap();

        let rules = load_path_replacements(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern.as_str(), "v([0-9]+)/");
    }

    #[test]
    fn load_path_replacements_str_wraps_config_error() {
        let result = load_path_replacements_str(r#""all""#);
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::InvalidRules { .. }))
        ));
    }
}

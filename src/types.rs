//! Core types shared by the transformation primitives.

use std::fmt;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::schema::SchemaLike;

/// Keys kept by `delete_empty_properties` even when their value is empty.
pub const PRESERVED_EMPTY_KEYS: &[&str] = &["example", "default"];

/// Prefix marking a vendor extension key.
pub const VENDOR_EXTENSION_PREFIX: &str = "x-";

/// Scope that makes a path replacement apply everywhere.
pub const SCOPE_ALL: &str = "all";

/// Scope used while building tag groups.
pub const SCOPE_GROUPS: &str = "groups";

/// Scope used while emitting endpoint paths.
pub const SCOPE_ENDPOINTS: &str = "endpoints";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Any value handed to the predicates.
///
/// Plain data is a borrowed [`Value`]; regular expressions, callables and
/// schema objects are not JSON and get their own variants so the
/// predicates can tell them apart.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// No value at all.
    Absent,
    /// Plain structured data, including `null`.
    Json(&'a Value),
    /// A compiled regular expression.
    Pattern(&'a Regex),
    /// An invocable value.
    Callable(&'a dyn Fn(&Value) -> Value),
    /// A schema object from the validation library.
    Schema(&'a dyn SchemaLike),
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Absent => f.write_str("Absent"),
            Operand::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Operand::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Operand::Callable(_) => f.write_str("Callable"),
            Operand::Schema(schema) => f
                .debug_tuple("Schema")
                .field(&schema.schema_type())
                .finish(),
        }
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        Operand::Json(value)
    }
}

impl<'a> From<Option<&'a Value>> for Operand<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Operand::Absent, Operand::Json)
    }
}

impl<'a> From<&'a Regex> for Operand<'a> {
    fn from(re: &'a Regex) -> Self {
        Operand::Pattern(re)
    }
}

/// A rewrite applied to route paths for a given processing scope.
///
/// Deserializes from `{ "replaceIn": "groups", "pattern": "[.].*$", "replacement": "" }`;
/// the pattern is compiled on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawPathReplacement")]
pub struct PathReplacement {
    /// `"all"` or a caller-defined tag such as `"groups"`.
    pub scope: String,
    pub pattern: Regex,
    /// Replacement text; `$1`/`${name}` refer to capture groups.
    pub replacement: String,
}

impl PathReplacement {
    /// Compile a replacement rule.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if `pattern` is not a valid regex.
    pub fn new(
        scope: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let compiled = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            scope: scope.into(),
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// Whether this rule runs for the given active scopes.
    pub fn applies_to<S: AsRef<str>>(&self, active_scopes: &[S]) -> bool {
        self.scope == SCOPE_ALL || active_scopes.iter().any(|s| s.as_ref() == self.scope)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPathReplacement {
    #[serde(alias = "scope")]
    replace_in: String,
    pattern: String,
    #[serde(default)]
    replacement: String,
}

impl TryFrom<RawPathReplacement> for PathReplacement {
    type Error = ConfigError;

    fn try_from(raw: RawPathReplacement) -> Result<Self, Self::Error> {
        PathReplacement::new(raw.replace_in, &raw.pattern, raw.replacement)
    }
}

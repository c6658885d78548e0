//! Schema introspection.
//!
//! The validation library is external; its schema objects reach this crate
//! through the [`SchemaLike`] capability trait. The integration layer
//! implements the trait for the library's type, or hands over an owned
//! [`Schema`] description.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Operand;

/// Schema type name for map-like values.
pub const OBJECT_TYPE: &str = "object";

/// Schema type name for values with no type constraint.
pub const ANY_TYPE: &str = "any";

/// Capabilities the toolkit reads from a validation-schema object.
pub trait SchemaLike {
    /// Type name of the described value (`"object"`, `"string"`, ...).
    fn schema_type(&self) -> &str;

    /// Named child schemas, in declaration order.
    ///
    /// `None` when the schema declares no keys at all, which is different
    /// from an object schema explicitly declared with zero keys.
    fn children(&self) -> Option<Vec<(&str, &dyn SchemaLike)>>;

    /// Metadata maps attached to the schema, in attachment order.
    fn meta_entries(&self) -> &[Map<String, Value>];

    fn label(&self) -> Option<&str> {
        None
    }

    /// Owned description of this schema and all of its children.
    fn describe(&self) -> Schema {
        Schema {
            kind: self.schema_type().to_string(),
            label: self.label().map(String::from),
            keys: self.children().map(|children| {
                children
                    .into_iter()
                    .map(|(name, child)| (name.to_string(), child.describe()))
                    .collect()
            }),
            allow: Vec::new(),
            metas: self.meta_entries().to_vec(),
        }
    }
}

/// Owned schema description.
///
/// Serializes as `{ "type": "object", "keys": { ... }, "metas": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<IndexMap<String, Schema>>,
    /// Literal values the schema accepts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metas: Vec<Map<String, Value>>,
}

impl Schema {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// An object schema with no declared keys.
    pub fn object() -> Self {
        Self::new(OBJECT_TYPE)
    }

    pub fn any() -> Self {
        Self::new(ANY_TYPE)
    }

    /// Declare a named child, turning the key set on if it was absent.
    pub fn with_key(mut self, name: impl Into<String>, child: Schema) -> Self {
        self.keys
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), child);
        self
    }

    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.metas.push(meta);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_allow(mut self, value: Value) -> Self {
        self.allow.push(value);
        self
    }

    /// Implicit object schema for a plain map.
    ///
    /// Nested maps become nested object schemas; every other value becomes
    /// an `any` schema that allows exactly that literal.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let keys = map
            .iter()
            .map(|(name, value)| {
                let child = match value {
                    Value::Object(nested) => Schema::from_map(nested),
                    literal => Schema::any().with_allow(literal.clone()),
                };
                (name.clone(), child)
            })
            .collect();

        Self {
            keys: Some(keys),
            ..Self::object()
        }
    }
}

impl SchemaLike for Schema {
    fn schema_type(&self) -> &str {
        &self.kind
    }

    fn children(&self) -> Option<Vec<(&str, &dyn SchemaLike)>> {
        self.keys.as_ref().map(|keys| {
            keys.iter()
                .map(|(name, child)| (name.as_str(), child as &dyn SchemaLike))
                .collect()
        })
    }

    fn meta_entries(&self) -> &[Map<String, Value>] {
        &self.metas
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn describe(&self) -> Schema {
        self.clone()
    }
}

/// Result of [`to_schema_object`]: either the caller's schema or a wrapped map.
pub enum SchemaObject<'a> {
    Existing(&'a dyn SchemaLike),
    Wrapped(Schema),
}

impl SchemaObject<'_> {
    pub fn as_schema(&self) -> &dyn SchemaLike {
        match self {
            SchemaObject::Existing(schema) => *schema,
            SchemaObject::Wrapped(schema) => schema,
        }
    }
}

impl fmt::Debug for SchemaObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaObject::Existing(schema) => f
                .debug_tuple("Existing")
                .field(&schema.schema_type())
                .finish(),
            SchemaObject::Wrapped(schema) => f.debug_tuple("Wrapped").field(schema).finish(),
        }
    }
}

impl SchemaLike for SchemaObject<'_> {
    fn schema_type(&self) -> &str {
        self.as_schema().schema_type()
    }

    fn children(&self) -> Option<Vec<(&str, &dyn SchemaLike)>> {
        self.as_schema().children()
    }

    fn meta_entries(&self) -> &[Map<String, Value>] {
        self.as_schema().meta_entries()
    }

    fn label(&self) -> Option<&str> {
        self.as_schema().label()
    }

    fn describe(&self) -> Schema {
        self.as_schema().describe()
    }
}

/// True if the operand is a schema object.
pub fn is_schema(operand: Operand<'_>) -> bool {
    matches!(operand, Operand::Schema(_))
}

/// True if the operand is an object schema declaring at least one child.
pub fn has_schema_children(operand: Operand<'_>) -> bool {
    let Operand::Schema(schema) = operand else {
        return false;
    };
    schema.schema_type() == OBJECT_TYPE
        && schema
            .children()
            .is_some_and(|children| !children.is_empty())
}

/// Coerce an operand into a schema object.
///
/// Schema objects are returned as-is; plain maps are wrapped into an
/// implicit object schema. Anything else yields `None`.
pub fn to_schema_object(operand: Operand<'_>) -> Option<SchemaObject<'_>> {
    match operand {
        Operand::Schema(schema) => Some(SchemaObject::Existing(schema)),
        Operand::Json(Value::Object(map)) => {
            tracing::debug!(keys = map.len(), "wrapping plain object into object schema");
            Some(SchemaObject::Wrapped(Schema::from_map(map)))
        }
        _ => None,
    }
}

/// True if the operand is a schema carrying a non-empty metadata entry.
pub fn has_schema_meta(operand: Operand<'_>) -> bool {
    let Operand::Schema(schema) = operand else {
        return false;
    };
    schema.meta_entries().iter().any(|entry| !entry.is_empty())
}

/// Value bound to `name` in the first metadata entry that defines it.
pub fn schema_meta_property<'a>(operand: Operand<'a>, name: &str) -> Option<&'a Value> {
    let Operand::Schema(schema) = operand else {
        return None;
    };
    schema
        .meta_entries()
        .iter()
        .find_map(|entry| entry.get(name))
}

/// Label attached to a schema object.
pub fn schema_label(operand: Operand<'_>) -> Option<&str> {
    match operand {
        Operand::Schema(schema) => schema.label(),
        _ => None,
    }
}

//! OAS Schema Utilities
//!
//! Structural transformation primitives for turning validation schemas and the
//! plain JSON that accompanies them into OpenAPI document data: route ids,
//! vendor extensions, path rewrites and pruned property maps.
//!
//! Every operation borrows its input and returns a new value.
//!
//! # Example
//!
//! ```
//! use oas_schema_utils::{assign_vendor_extensions, create_id, delete_empty_properties};
//! use serde_json::json;
//!
//! assert_eq!(create_id("PUT", "v1/sum/add/{a}/{b}"), "putV1SumAddAB");
//!
//! let operation = json!({ "summary": "Add", "tags": [], "default": {} });
//! let pruned = delete_empty_properties(operation.as_object().unwrap());
//! assert!(pruned.get("tags").is_none());
//! assert!(pruned.get("default").is_some());
//!
//! let merged = assign_vendor_extensions(
//!     &json!({ "summary": "Add" }),
//!     &json!({ "x-code-samples": [], "notes": "ignored" }),
//! );
//! assert_eq!(merged, json!({ "summary": "Add", "x-code-samples": [] }));
//! ```
//!
//! # Path Replacements
//!
//! Rules are loaded from configuration and applied per scope:
//!
//! ```
//! use oas_schema_utils::{load_path_replacements_str, replace_in_path};
//!
//! let rules = load_path_replacements_str(r#"[
//!     { "replaceIn": "all", "pattern": "v([0-9]+)/", "replacement": "" },
//!     { "replaceIn": "groups", "pattern": "[.].*$", "replacement": "" }
//! ]"#).unwrap();
//!
//! assert_eq!(replace_in_path("api/v1/users.get", &["endpoints"], &rules), "api/users.get");
//! assert_eq!(replace_in_path("api/v1/users.get", &["groups"], &rules), "api/users");
//! ```
//!
//! # Schema Objects
//!
//! Schemas from the validation library are read through [`SchemaLike`]; values
//! that are not plain JSON enter the predicates as an [`Operand`].
//!
//! | Operand | `is_object` | `is_schema` | `is_function` | `is_regex` |
//! |---------|-------------|-------------|---------------|------------|
//! | `Json(object)` | yes | no | no | no |
//! | `Schema(_)` | yes | yes | no | no |
//! | `Callable(_)` | no | no | yes | no |
//! | `Pattern(_)` | no | no | no | yes |

mod error;
mod loader;
mod naming;
mod predicates;
mod rewrite;
mod schema;
mod sequence;
mod types;
mod vendor;

pub use error::{ConfigError, LoadError};
pub use loader::{
    load_path_replacements, load_path_replacements_str, load_value, load_value_str,
    parse_path_replacements,
};
pub use naming::{
    append_query_string, create_id, remove_trailing_slash, replace_in_path, to_title_case,
};
pub use predicates::{first, has_key, has_properties, is_function, is_object, is_regex};
pub use rewrite::{delete_empty_properties, find_and_rename_key, is_empty_value, remove_props};
pub use schema::{
    has_schema_children, has_schema_meta, is_schema, schema_label, schema_meta_property,
    to_schema_object, Schema, SchemaLike, SchemaObject, ANY_TYPE, OBJECT_TYPE,
};
pub use sequence::{replace_value, sort_first_item};
pub use types::{
    json_type_name, Operand, PathReplacement, PRESERVED_EMPTY_KEYS, SCOPE_ALL, SCOPE_ENDPOINTS,
    SCOPE_GROUPS, VENDOR_EXTENSION_PREFIX,
};
pub use vendor::{assign_vendor_extensions, is_vendor_extension, vendor_extensions};

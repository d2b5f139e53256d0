//! Schema Object for OpenRPC specification.
//!
//! The model deliberately covers only the `type` keyword (a single JSON
//! primitive tag or a set of tags for union types) plus the descriptive
//! `title`/`description` annotations. Structural keywords such as
//! `properties`, `items` or `$ref` resolution are outside this crate.

use crate::error::{OpenRpcError, OpenRpcResult};
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The six JSON Schema primitive type tags.
///
/// Variants are declared alphabetically so that the derived `Ord` gives the
/// canonical order union tag sets are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// JSON array
    Array,
    /// JSON boolean
    Boolean,
    /// JSON null
    Null,
    /// JSON number (integers and floating-point values share this tag)
    Number,
    /// JSON object
    Object,
    /// JSON string
    String,
}

impl JsonType {
    /// The tag as it appears in a rendered document.
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::String => "string",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` keyword of a Schema: a single tag, or a set of tags for a
/// union type.
///
/// A union built from members that map to the same tag stays a union; a
/// singleton set renders as a one-element array, not as a plain string.
/// Set equality ignores construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// A single primitive type tag, rendered as a plain string
    Single(JsonType),
    /// A set of primitive type tags, rendered as a sorted array
    Union(BTreeSet<JsonType>),
}

impl SchemaType {
    /// Number of distinct tags held.
    pub fn len(&self) -> usize {
        match self {
            SchemaType::Single(_) => 1,
            SchemaType::Union(tags) => tags.len(),
        }
    }

    /// True when no tag is held, which only a deserialized empty union can
    /// produce.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the given tag is part of this type.
    pub fn contains(&self, tag: JsonType) -> bool {
        match self {
            SchemaType::Single(t) => *t == tag,
            SchemaType::Union(tags) => tags.contains(&tag),
        }
    }
}

impl From<JsonType> for SchemaType {
    fn from(tag: JsonType) -> Self {
        SchemaType::Single(tag)
    }
}

/// A Schema Object describing the shape of a parameter or result value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// The JSON type tag, or set of tags for a union type.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// A short title for the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A description of the value the schema constrains.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    /// Create a schema with a single type tag
    pub fn new(tag: JsonType) -> Self {
        Self {
            schema_type: SchemaType::Single(tag),
            title: None,
            description: None,
        }
    }

    /// Create a string schema
    pub fn string() -> Self {
        Self::new(JsonType::String)
    }

    /// Create a number schema
    pub fn number() -> Self {
        Self::new(JsonType::Number)
    }

    /// Create an object schema
    pub fn object() -> Self {
        Self::new(JsonType::Object)
    }

    /// Create an array schema
    pub fn array() -> Self {
        Self::new(JsonType::Array)
    }

    /// Create a boolean schema
    pub fn boolean() -> Self {
        Self::new(JsonType::Boolean)
    }

    /// Create a null schema
    pub fn null() -> Self {
        Self::new(JsonType::Null)
    }

    /// Create a union schema from a set of type tags.
    ///
    /// Duplicate tags collapse. Fails when the resulting set is empty.
    pub fn union(tags: impl IntoIterator<Item = JsonType>) -> OpenRpcResult<Self> {
        let tags: BTreeSet<JsonType> = tags.into_iter().collect();
        if tags.is_empty() {
            return Err(OpenRpcError::schema("union type set cannot be empty"));
        }
        Ok(Self {
            schema_type: SchemaType::Union(tags),
            title: None,
            description: None,
        })
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for Schema {
    fn validate(&self) -> OpenRpcResult<()> {
        // An empty union can only enter through deserialization; the union()
        // constructor rejects it up front.
        if self.schema_type.is_empty() {
            return Err(OpenRpcError::schema("union type set cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_constructors() {
        assert_eq!(Schema::string().schema_type, SchemaType::Single(JsonType::String));
        assert_eq!(Schema::number().schema_type, SchemaType::Single(JsonType::Number));
        assert_eq!(Schema::null().schema_type, SchemaType::Single(JsonType::Null));
    }

    #[test]
    fn test_union_collapses_duplicates() {
        let schema = Schema::union([JsonType::Number, JsonType::Number]).unwrap();
        assert_eq!(schema.schema_type.len(), 1);
        // A singleton union is still a union, not a single tag.
        assert_ne!(schema, Schema::number());
    }

    #[test]
    fn test_union_order_independent_equality() {
        let a = Schema::union([JsonType::String, JsonType::Null]).unwrap();
        let b = Schema::union([JsonType::Null, JsonType::String]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_union_rejected() {
        let result = Schema::union([]);
        assert!(matches!(result, Err(OpenRpcError::SchemaError { .. })));
    }

    #[test]
    fn test_single_tag_serializes_as_string() {
        let json_value = serde_json::to_value(Schema::string()).unwrap();
        assert_eq!(json_value, json!({"type": "string"}));
    }

    #[test]
    fn test_union_serializes_as_sorted_array() {
        let schema = Schema::union([JsonType::String, JsonType::Number, JsonType::Null]).unwrap();
        let json_value = serde_json::to_value(&schema).unwrap();
        assert_eq!(json_value, json!({"type": ["null", "number", "string"]}));
    }

    #[test]
    fn test_schema_deserialization() {
        let schema: Schema = serde_json::from_value(json!({"type": "boolean"})).unwrap();
        assert_eq!(schema, Schema::boolean());

        let schema: Schema = serde_json::from_value(json!({"type": ["number", "null"]})).unwrap();
        assert_eq!(schema, Schema::union([JsonType::Null, JsonType::Number]).unwrap());
    }

    #[test]
    fn test_deserialized_empty_union_fails_validation() {
        let schema: Schema = serde_json::from_value(json!({"type": []})).unwrap();
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_schema_with_annotations() {
        let schema = Schema::string()
            .with_title("User name")
            .with_description("Canonical display name");

        let json_value = serde_json::to_value(&schema).unwrap();
        assert_eq!(json_value["title"], "User name");
        assert_eq!(json_value["description"], "Canonical display name");
    }

    #[test]
    fn test_schema_builder() {
        let schema = Schema::builder()
            .schema_type(SchemaType::Single(JsonType::Number))
            .title("Count".to_string())
            .build();

        assert_eq!(schema.schema_type, SchemaType::Single(JsonType::Number));
        assert_eq!(schema.title, Some("Count".to_string()));
    }

    #[test]
    fn test_equal_inputs_yield_equal_schemas() {
        assert_eq!(Schema::number(), Schema::number());
        assert_eq!(
            Schema::union([JsonType::Number, JsonType::String]).unwrap(),
            Schema::union([JsonType::String, JsonType::Number]).unwrap()
        );
    }
}

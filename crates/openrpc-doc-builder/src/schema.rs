//! Mapping from declarative type expressions to Schema Objects.

use openrpc_doc_types::error::{OpenRpcError, OpenRpcResult};
use openrpc_doc_types::{JsonType, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A primitive type the schema mapper recognizes.
///
/// The correspondence to JSON type tags is the fixed primitive mapping
/// table: `Str` maps to string, `Int` and `Float` both map to number, and
/// `Unit` maps to null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// A string value
    Str,
    /// An integer value
    Int,
    /// A floating-point value
    Float,
    /// The absence of a meaningful value
    Unit,
}

impl PrimitiveType {
    /// The JSON type tag this primitive maps to.
    pub const fn json_type(self) -> JsonType {
        match self {
            PrimitiveType::Str => JsonType::String,
            PrimitiveType::Int | PrimitiveType::Float => JsonType::Number,
            PrimitiveType::Unit => JsonType::Null,
        }
    }
}

/// A type annotation as supplied by the embedding application.
///
/// Annotations are carried unevaluated through signature reflection; the
/// mapper only runs when a schema is actually rendered, so an unsupported
/// annotation surfaces at render time, not at reflection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A recognized primitive type
    Primitive(PrimitiveType),
    /// A union of recognized primitive types
    Union(Vec<PrimitiveType>),
    /// Any other annotation, kept verbatim for error reporting. The mapper
    /// does not introspect composite or user-defined types.
    Named(String),
}

impl TypeExpr {
    /// Shorthand for a string annotation
    pub fn str() -> Self {
        TypeExpr::Primitive(PrimitiveType::Str)
    }

    /// Shorthand for an integer annotation
    pub fn int() -> Self {
        TypeExpr::Primitive(PrimitiveType::Int)
    }

    /// Shorthand for a floating-point annotation
    pub fn float() -> Self {
        TypeExpr::Primitive(PrimitiveType::Float)
    }

    /// Shorthand for the unit annotation
    pub fn unit() -> Self {
        TypeExpr::Primitive(PrimitiveType::Unit)
    }

    /// A union annotation over the given primitives
    pub fn union(members: impl IntoIterator<Item = PrimitiveType>) -> Self {
        TypeExpr::Union(members.into_iter().collect())
    }

    /// An annotation the mapper does not understand
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Primitive(p) => write!(f, "{}", p.json_type()),
            TypeExpr::Union(members) => {
                let tags: Vec<&str> = members.iter().map(|m| m.json_type().as_str()).collect();
                write!(f, "{}", tags.join(" | "))
            }
            TypeExpr::Named(name) => f.write_str(name),
        }
    }
}

/// Map a type expression to a Schema Object.
///
/// Primitives map to a single-tag schema per the primitive mapping table.
/// Unions map to the deduplicated set of member tags; the set stays a set
/// even when every member collapses to the same tag. `Named` annotations
/// fail with [`OpenRpcError::UnsupportedType`].
pub fn schema(type_expr: &TypeExpr) -> OpenRpcResult<Schema> {
    match type_expr {
        TypeExpr::Primitive(primitive) => Ok(Schema::new(primitive.json_type())),
        TypeExpr::Union(members) => {
            let tags: BTreeSet<JsonType> = members.iter().map(|m| m.json_type()).collect();
            Schema::union(tags)
        }
        TypeExpr::Named(name) => Err(OpenRpcError::unsupported_type(name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openrpc_doc_types::SchemaType;

    #[test]
    fn test_primitive_mapping_table() {
        assert_eq!(schema(&TypeExpr::str()).unwrap(), Schema::string());
        assert_eq!(schema(&TypeExpr::int()).unwrap(), Schema::number());
        assert_eq!(schema(&TypeExpr::float()).unwrap(), Schema::number());
        assert_eq!(schema(&TypeExpr::unit()).unwrap(), Schema::null());
    }

    #[test]
    fn test_union_maps_to_tag_set() {
        let mapped = schema(&TypeExpr::union([PrimitiveType::Str, PrimitiveType::Unit])).unwrap();
        assert_eq!(
            mapped,
            Schema::union([JsonType::Null, JsonType::String]).unwrap()
        );
    }

    #[test]
    fn test_union_collapses_same_tag_members() {
        // Int and Float share the number tag; the union stays a singleton set.
        let mapped = schema(&TypeExpr::union([PrimitiveType::Int, PrimitiveType::Float])).unwrap();
        assert_eq!(mapped.schema_type, SchemaType::Union([JsonType::Number].into()));
        assert_ne!(mapped, Schema::number());
    }

    #[test]
    fn test_union_is_order_independent() {
        let a = schema(&TypeExpr::union([PrimitiveType::Str, PrimitiveType::Int])).unwrap();
        let b = schema(&TypeExpr::union([PrimitiveType::Int, PrimitiveType::Str])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_union_is_malformed() {
        let result = schema(&TypeExpr::union([]));
        assert!(matches!(result, Err(OpenRpcError::SchemaError { .. })));
    }

    #[test]
    fn test_named_type_is_unsupported() {
        let result = schema(&TypeExpr::named("Vec<Pet>"));
        match result {
            Err(OpenRpcError::UnsupportedType { type_name }) => {
                assert_eq!(type_name, "Vec<Pet>");
            }
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn test_mapper_is_referentially_transparent() {
        let expr = TypeExpr::union([PrimitiveType::Float, PrimitiveType::Str]);
        assert_eq!(schema(&expr).unwrap(), schema(&expr).unwrap());
    }

    #[test]
    fn test_type_expr_display() {
        assert_eq!(TypeExpr::str().to_string(), "string");
        assert_eq!(
            TypeExpr::union([PrimitiveType::Int, PrimitiveType::Unit]).to_string(),
            "number | null"
        );
        assert_eq!(TypeExpr::named("Pet").to_string(), "Pet");
    }
}

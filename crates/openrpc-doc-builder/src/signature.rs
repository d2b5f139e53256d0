//! Declarative descriptions of callable signatures.
//!
//! Rather than introspecting live callables, the embedding application
//! supplies an ahead-of-time description of each one: its name, its formal
//! parameters in declaration order, and its return annotation. The
//! reflection pipeline in [`crate::method`] consumes these descriptions.

use crate::schema::TypeExpr;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// How a formal parameter binds at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    /// May only be supplied by position, never by name
    PositionalOnly,
    /// May be supplied by position or by name
    #[default]
    PositionalOrKeyword,
    /// May only be supplied by name
    KeywordOnly,
    /// Collects all remaining positional arguments
    VariadicPositional,
    /// Collects all remaining keyword arguments
    VariadicKeyword,
}

impl ParameterKind {
    /// Whether this kind collects a variable number of arguments.
    pub fn is_variadic(self) -> bool {
        matches!(
            self,
            ParameterKind::VariadicPositional | ParameterKind::VariadicKeyword
        )
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParameterKind::PositionalOnly => "positional-only",
            ParameterKind::PositionalOrKeyword => "positional-or-keyword",
            ParameterKind::KeywordOnly => "keyword-only",
            ParameterKind::VariadicPositional => "variadic-positional",
            ParameterKind::VariadicKeyword => "variadic-keyword",
        })
    }
}

/// One formal parameter of a described callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct ParameterSpec {
    /// The parameter identifier.
    pub name: String,

    /// The declared type annotation.
    pub annotation: TypeExpr,

    /// How the parameter binds at the call site.
    #[builder(default)]
    #[serde(default)]
    pub kind: ParameterKind,

    /// Whether the parameter declares a default value. A parameter without
    /// a default is required.
    #[builder(default)]
    #[serde(default)]
    pub has_default: bool,
}

impl ParameterSpec {
    /// Create a new ParameterSpec with the given name and annotation,
    /// positional-or-keyword binding and no default
    pub fn new(name: impl Into<String>, annotation: TypeExpr) -> Self {
        Self {
            name: name.into(),
            annotation,
            kind: ParameterKind::default(),
            has_default: false,
        }
    }

    /// Set the binding kind
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the parameter as declaring a default value
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A complete callable description: name, ordered parameters, and an
/// optional return annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct FunctionSignature {
    /// The callable's name.
    pub name: String,

    /// The formal parameters, in declaration order.
    #[builder(default)]
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// The declared return annotation, absent when the callable declares
    /// none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_annotation: Option<TypeExpr>,
}

impl FunctionSignature {
    /// Create a new signature with no parameters and no return annotation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_annotation: None,
        }
    }

    /// Append a parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the return annotation
    pub fn with_return(mut self, annotation: TypeExpr) -> Self {
        self.return_annotation = Some(annotation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_spec_defaults() {
        let spec = ParameterSpec::new("pet_id", TypeExpr::int());
        assert_eq!(spec.kind, ParameterKind::PositionalOrKeyword);
        assert!(!spec.has_default);
    }

    #[test]
    fn test_signature_accumulates_parameters_in_order() {
        let signature = FunctionSignature::new("move_pet")
            .with_parameter(ParameterSpec::new("pet_id", TypeExpr::int()))
            .with_parameter(ParameterSpec::new("shelter", TypeExpr::str()).with_default());

        let names: Vec<&str> = signature.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["pet_id", "shelter"]);
    }

    #[test]
    fn test_variadic_detection() {
        assert!(ParameterKind::VariadicPositional.is_variadic());
        assert!(ParameterKind::VariadicKeyword.is_variadic());
        assert!(!ParameterKind::PositionalOnly.is_variadic());
        assert!(!ParameterKind::KeywordOnly.is_variadic());
    }

    #[test]
    fn test_signature_builder() {
        let signature = FunctionSignature::builder()
            .name("ping".to_string())
            .return_annotation(TypeExpr::str())
            .build();

        assert!(signature.parameters.is_empty());
        assert_eq!(signature.return_annotation, Some(TypeExpr::str()));
    }
}

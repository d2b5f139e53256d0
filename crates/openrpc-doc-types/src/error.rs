//! Error types shared across the document model and the signature builder.

use thiserror::Error;

/// Errors produced while constructing or validating OpenRPC documents.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpenRpcError {
    /// A spec constraint was violated
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
        /// Optional field path where the error occurred
        field_path: Option<String>,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field_name}")]
    MissingField {
        /// Name of the missing required field
        field_name: String,
    },

    /// A type annotation the schema mapper cannot map to a JSON primitive
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// The offending type annotation, as supplied by the caller
        type_name: String,
    },

    /// A parameter whose binding kind cannot be represented by a `Param`
    #[error("Unsupported parameter kind for '{parameter}': {kind}")]
    UnsupportedParameterKind {
        /// Name of the offending parameter
        parameter: String,
        /// The binding kind that is not representable
        kind: String,
    },

    /// A schema value that violates the type-tag invariant
    #[error("Malformed schema: {message}")]
    SchemaError {
        /// Schema error message
        message: String,
    },

    /// Error when parsing or serializing JSON
    #[error("JSON error: {message}")]
    JsonError {
        /// JSON parsing/serialization error message
        message: String,
    },
}

impl OpenRpcError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field_path: None,
        }
    }

    /// Create a new validation error with field path
    pub fn validation_with_path(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field_path: Some(field_path.into()),
        }
    }

    /// Create a new missing field error
    pub fn missing_field(field_name: impl Into<String>) -> Self {
        Self::MissingField {
            field_name: field_name.into(),
        }
    }

    /// Create a new unsupported type error
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a new unsupported parameter kind error
    pub fn unsupported_parameter(parameter: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedParameterKind {
            parameter: parameter.into(),
            kind: kind.into(),
        }
    }

    /// Create a new malformed schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::JsonError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for OpenRpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

/// Result type for OpenRPC operations
pub type OpenRpcResult<T> = Result<T, OpenRpcError>;

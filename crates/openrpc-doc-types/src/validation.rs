//! Opt-in structural validation for document model objects.
//!
//! Constructors never reject input; callers that want spec conformance run
//! `validate()` over the assembled tree before handing it to a serializer.

use crate::error::{OpenRpcError, OpenRpcResult};

/// Structural validation of a document model object and its children.
pub trait Validate {
    /// Check this object against the OpenRPC specification's constraints.
    fn validate(&self) -> OpenRpcResult<()>;
}

/// Validate a key used in a Components map.
///
/// Keys must match `^[a-zA-Z0-9.\-_]+$` per the specification.
pub fn validate_component_key(key: &str) -> OpenRpcResult<()> {
    if key.is_empty() {
        return Err(OpenRpcError::validation("component key cannot be empty"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(OpenRpcError::validation(format!(
            "component key '{}' contains characters outside [a-zA-Z0-9.-_]",
            key
        )));
    }

    Ok(())
}

/// Validate a method name.
///
/// Names prefixed with `rpc.` are reserved by JSON-RPC for protocol-internal
/// methods and may not be described by a document.
pub fn validate_method_name(name: &str) -> OpenRpcResult<()> {
    if name.is_empty() {
        return Err(OpenRpcError::missing_field("name"));
    }

    if name.starts_with("rpc.") {
        return Err(OpenRpcError::validation(format!(
            "method name '{}' uses the reserved 'rpc.' prefix",
            name
        )));
    }

    Ok(())
}

//! Link Object for OpenRPC specification.

use crate::Server;
use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A possible design-time link for a result. The presence of a link does not
/// guarantee the caller's ability to invoke it; it documents a known
/// relationship between a result and another method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Canonical name of the link.
    pub name: String,

    /// A short description for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A description of the link.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The name of an existing, resolvable OpenRPC method. The field MUST
    /// resolve to a unique Method Object; relative method values are not
    /// permitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Parameters to pass to the linked method. Each value is a constant or a
    /// runtime expression evaluated and passed when the link is followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,

    /// A server object to be used by the target method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

impl Link {
    /// Create a new Link with required name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
            description: None,
            method: None,
            params: None,
            server: None,
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the target method name
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set all parameters at once
    pub fn with_params(mut self, params: HashMap<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// Add a single parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the server
    pub fn with_server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }
}

impl Validate for Link {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.name.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("name"));
        }

        if let Some(ref method) = self.method {
            crate::validation::validate_method_name(method)?;
        }

        if let Some(ref server) = self.server {
            server.validate()?;
        }

        if let Some(ref params) = self.params {
            if params.keys().any(|key| key.is_empty()) {
                return Err(crate::error::OpenRpcError::validation(
                    "link parameter name cannot be empty",
                ));
            }
        }

        Ok(())
    }
}

/// A runtime expression evaluated once the desired values are known, used
/// where a link or server value can only be constructed at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeExpression(pub String);

impl RuntimeExpression {
    /// Create a new runtime expression
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// An expression referencing a field of the method result
    pub fn result(path: &str) -> Self {
        Self(format!("$result.{}", path))
    }

    /// An expression referencing a method parameter
    pub fn param(name: &str) -> Self {
        Self(format!("$params.{}", name))
    }

    /// The expression string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuntimeExpression {
    fn from(expression: &str) -> Self {
        Self(expression.to_string())
    }
}

impl From<RuntimeExpression> for Value {
    fn from(expression: RuntimeExpression) -> Self {
        Value::String(expression.0)
    }
}

impl std::fmt::Display for RuntimeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

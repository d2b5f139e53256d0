//! Server Object and Server Variable Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An object representing a server the described API is reachable at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Server {
    /// A name to be used as the canonical name for the server.
    pub name: String,

    /// A URL to the target host. The URL is a runtime expression and MAY
    /// contain `{variable}` placeholders substituted from `variables`.
    pub url: String,

    /// A short summary of what the server is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// An optional string describing the host designated by the URL.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A map between a variable name and its value, substituted into the
    /// server URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ServerVariable>>,
}

impl Server {
    /// Create a new Server with required fields
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            summary: None,
            description: None,
            variables: None,
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

    /// Set all variables at once
    pub fn with_variables(mut self, variables: HashMap<String, ServerVariable>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Add a single variable
    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), variable);
        self
    }
}

impl Validate for Server {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.name.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("name"));
        }

        // The URL may contain template variables, so only presence is checked.
        if self.url.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("url"));
        }

        if let Some(ref variables) = self.variables {
            for (name, variable) in variables {
                if name.is_empty() {
                    return Err(crate::error::OpenRpcError::validation(
                        "server variable name cannot be empty",
                    ));
                }
                variable.validate()?;
            }
        }

        Ok(())
    }
}

/// A variable for server URL template substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct ServerVariable {
    /// An enumeration of string values to be used if the substitution
    /// options are from a limited set.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// The default value to use for substitution. Unlike a Schema default,
    /// this value is always sent when no alternate is supplied.
    pub default: String,

    /// An optional description for the server variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerVariable {
    /// Create a new ServerVariable with required default value
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            enum_values: None,
            default: default.into(),
            description: None,
        }
    }

    /// Set the enum values
    pub fn with_enum(mut self, enum_values: Vec<String>) -> Self {
        self.enum_values = Some(enum_values);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for ServerVariable {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.default.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("default"));
        }

        if let Some(ref enum_values) = self.enum_values {
            if enum_values.is_empty() {
                return Err(crate::error::OpenRpcError::validation(
                    "enum cannot be empty if provided",
                ));
            }

            if !enum_values.contains(&self.default) {
                return Err(crate::error::OpenRpcError::validation(format!(
                    "default value '{}' is not one of the enum values",
                    self.default
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_creation() {
        let server = Server::new("staging", "https://staging.example.com")
            .with_summary("Staging environment");

        assert_eq!(server.name, "staging");
        assert_eq!(server.summary, Some("Staging environment".to_string()));
    }

    #[test]
    fn test_server_validation() {
        assert!(Server::new("test", "https://example.com").validate().is_ok());
        assert!(Server::new("", "https://example.com").validate().is_err());
        assert!(Server::new("test", "").validate().is_err());
    }

    #[test]
    fn test_server_variable_validation() {
        assert!(ServerVariable::new("8080").validate().is_ok());
        assert!(ServerVariable::new("").validate().is_err());

        // Default must be one of the enum values when an enum is given.
        let var = ServerVariable::new("9090")
            .with_enum(vec!["8080".to_string(), "8443".to_string()]);
        assert!(var.validate().is_err());

        let var = ServerVariable::new("8080")
            .with_enum(vec!["8080".to_string(), "8443".to_string()]);
        assert!(var.validate().is_ok());

        let var = ServerVariable::new("8080").with_enum(vec![]);
        assert!(var.validate().is_err());
    }

    #[test]
    fn test_server_serialization() {
        let server = Server::new("main", "https://api.example.com:{port}")
            .with_variable("port", ServerVariable::new("8080"));

        let json_value = serde_json::to_value(&server).unwrap();
        assert_eq!(json_value["name"], "main");
        assert_eq!(json_value["variables"]["port"], json!({"default": "8080"}));

        let deserialized: Server = serde_json::from_value(json_value).unwrap();
        assert_eq!(deserialized, server);
    }

    #[test]
    fn test_server_variable_enum_rename() {
        let var = ServerVariable::new("a").with_enum(vec!["a".to_string(), "b".to_string()]);
        let json_value = serde_json::to_value(&var).unwrap();
        assert_eq!(json_value, json!({"default": "a", "enum": ["a", "b"]}));
    }
}

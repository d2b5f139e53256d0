//! External Documentation Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Allows referencing an external resource for extended documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct ExternalDocumentation {
    /// The URL for the target documentation.
    pub url: String,

    /// A verbose explanation of the target documentation.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExternalDocumentation {
    /// Create a new ExternalDocumentation with required URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for ExternalDocumentation {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.url.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("url"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_external_documentation() {
        let docs = ExternalDocumentation::new("https://docs.example.com")
            .with_description("Full API guide");

        assert_eq!(
            serde_json::to_value(&docs).unwrap(),
            json!({"url": "https://docs.example.com", "description": "Full API guide"})
        );
    }

    #[test]
    fn test_external_documentation_validation() {
        assert!(ExternalDocumentation::new("https://docs.example.com").validate().is_ok());
        assert!(ExternalDocumentation::new("").validate().is_err());
    }
}

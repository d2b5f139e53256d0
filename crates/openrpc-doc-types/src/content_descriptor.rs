//! Content Descriptor Object for OpenRPC specification.

use crate::Schema;
use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Describes one named, schema-typed value: a method parameter or a result.
///
/// The `required` and `deprecated` flags default to `false` and are omitted
/// from rendered output when false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct ContentDescriptor {
    /// Name of the content that is being described. If the content described
    /// is a method parameter assignable by-name, this field SHALL define the
    /// parameter's key.
    pub name: String,

    /// Schema that describes the content.
    pub schema: Schema,

    /// A short summary of the content that is being described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the content descriptor behavior.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Determines if the content is a required field.
    #[serde(default, skip_serializing_if = "crate::is_false")]
    #[builder(default)]
    pub required: bool,

    /// Specifies that the content is deprecated and SHOULD be transitioned
    /// out of usage.
    #[serde(default, skip_serializing_if = "crate::is_false")]
    #[builder(default)]
    pub deprecated: bool,
}

impl ContentDescriptor {
    /// Create a new ContentDescriptor with required fields
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            summary: None,
            description: None,
            required: false,
            deprecated: false,
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

    /// Mark the content as required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the content as deprecated
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }
}

impl Validate for ContentDescriptor {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.name.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("name"));
        }

        self.schema.validate()?;

        Ok(())
    }
}

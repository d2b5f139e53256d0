//! Example Object and Example Pairing Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An example of a parameter or result value.
///
/// `value` and `external_value` are mutually exclusive; see
/// [`ExamplePairing`] for how the exclusivity is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Example {
    /// Canonical name of the example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A short summary of the example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the example.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embedded literal example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// A URL that points to the literal example, for values that cannot
    /// easily be included in the document.
    #[serde(rename = "externalValue", skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
}

impl Example {
    /// Create a new empty Example
    pub fn new() -> Self {
        Self {
            name: None,
            summary: None,
            description: None,
            value: None,
            external_value: None,
        }
    }

    /// Create an Example holding an embedded literal value
    pub fn with_value(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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

    /// Set the external value URL
    pub fn with_external_value(mut self, external_value: impl Into<String>) -> Self {
        self.external_value = Some(external_value.into());
        self
    }
}

impl Default for Example {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Example {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.value.is_some() && self.external_value.is_some() {
            return Err(crate::error::OpenRpcError::validation(
                "value and externalValue are mutually exclusive",
            ));
        }
        Ok(())
    }
}

/// A set of example values tied to a method, pairing parameter values with
/// the result they produce.
///
/// `value` and `external_value` are documented as mutually exclusive.
/// Construction does not enforce this; `validate()` reports the conflict,
/// leaving enforcement to the validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct ExamplePairing {
    /// Name for the example pairing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A short summary of the example pairing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the example pairing.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embedded literal example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// A URL that points to the literal example.
    #[serde(rename = "externalValue", skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
}

impl ExamplePairing {
    /// Create a new empty ExamplePairing
    pub fn new() -> Self {
        Self {
            name: None,
            summary: None,
            description: None,
            value: None,
            external_value: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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

    /// Set the embedded literal value
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the external value URL
    pub fn with_external_value(mut self, external_value: impl Into<String>) -> Self {
        self.external_value = Some(external_value.into());
        self
    }
}

impl Default for ExamplePairing {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ExamplePairing {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.value.is_some() && self.external_value.is_some() {
            return Err(crate::error::OpenRpcError::validation(
                "value and externalValue are mutually exclusive",
            ));
        }
        Ok(())
    }
}

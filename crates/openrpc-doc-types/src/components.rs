//! Components Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use crate::{ContentDescriptor, ErrorObject, Example, ExamplePairing, Link, Schema, Tag};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds a set of reusable objects. Objects defined here have no effect on
/// the API unless explicitly referenced from outside the components object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Components {
    /// Reusable Content Descriptor Objects.
    #[serde(rename = "contentDescriptors", skip_serializing_if = "Option::is_none")]
    pub content_descriptors: Option<HashMap<String, ContentDescriptor>>,

    /// Reusable Schema Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<HashMap<String, Schema>>,

    /// Reusable Example Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<HashMap<String, Example>>,

    /// Reusable Link Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,

    /// Reusable Error Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, ErrorObject>>,

    /// Reusable Example Pairing Objects.
    #[serde(
        rename = "examplePairingObjects",
        skip_serializing_if = "Option::is_none"
    )]
    pub example_pairings: Option<HashMap<String, ExamplePairing>>,

    /// Reusable Tag Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, Tag>>,
}

impl Components {
    /// Create a new empty Components object
    pub fn new() -> Self {
        Self {
            content_descriptors: None,
            schemas: None,
            examples: None,
            links: None,
            errors: None,
            example_pairings: None,
            tags: None,
        }
    }

    /// Add a content descriptor
    pub fn with_content_descriptor(
        mut self,
        name: impl Into<String>,
        content_descriptor: ContentDescriptor,
    ) -> Self {
        self.content_descriptors
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), content_descriptor);
        self
    }

    /// Add a schema
    pub fn with_schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.schemas
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), schema);
        self
    }

    /// Add an example
    pub fn with_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), example);
        self
    }

    /// Add a link
    pub fn with_link(mut self, name: impl Into<String>, link: Link) -> Self {
        self.links
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), link);
        self
    }

    /// Add an error
    pub fn with_error(mut self, name: impl Into<String>, error: ErrorObject) -> Self {
        self.errors
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), error);
        self
    }

    /// Add an example pairing
    pub fn with_example_pairing(
        mut self,
        name: impl Into<String>,
        example_pairing: ExamplePairing,
    ) -> Self {
        self.example_pairings
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), example_pairing);
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, name: impl Into<String>, tag: Tag) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), tag);
        self
    }

    /// Get a content descriptor by name
    pub fn get_content_descriptor(&self, name: &str) -> Option<&ContentDescriptor> {
        self.content_descriptors.as_ref()?.get(name)
    }

    /// Get a schema by name
    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.as_ref()?.get(name)
    }

    /// Get an example by name
    pub fn get_example(&self, name: &str) -> Option<&Example> {
        self.examples.as_ref()?.get(name)
    }

    /// Get a link by name
    pub fn get_link(&self, name: &str) -> Option<&Link> {
        self.links.as_ref()?.get(name)
    }

    /// Get an error by name
    pub fn get_error(&self, name: &str) -> Option<&ErrorObject> {
        self.errors.as_ref()?.get(name)
    }

    /// Get an example pairing by name
    pub fn get_example_pairing(&self, name: &str) -> Option<&ExamplePairing> {
        self.example_pairings.as_ref()?.get(name)
    }

    /// Get a tag by name
    pub fn get_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.as_ref()?.get(name)
    }

    /// Check if no component of any kind is held
    pub fn is_empty(&self) -> bool {
        self.content_descriptors
            .as_ref()
            .is_none_or(|m| m.is_empty())
            && self.schemas.as_ref().is_none_or(|m| m.is_empty())
            && self.examples.as_ref().is_none_or(|m| m.is_empty())
            && self.links.as_ref().is_none_or(|m| m.is_empty())
            && self.errors.as_ref().is_none_or(|m| m.is_empty())
            && self.example_pairings.as_ref().is_none_or(|m| m.is_empty())
            && self.tags.as_ref().is_none_or(|m| m.is_empty())
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_map<T: Validate>(
    map: &Option<HashMap<String, T>>,
    context: &str,
) -> OpenRpcResult<()> {
    if let Some(map) = map {
        for (key, value) in map {
            crate::validation::validate_component_key(key)?;
            value.validate().map_err(|e| {
                crate::error::OpenRpcError::validation_with_path(
                    e.to_string(),
                    format!("{}.{}", context, key),
                )
            })?;
        }
    }
    Ok(())
}

impl Validate for Components {
    fn validate(&self) -> OpenRpcResult<()> {
        validate_map(&self.content_descriptors, "contentDescriptors")?;
        validate_map(&self.schemas, "schemas")?;
        validate_map(&self.examples, "examples")?;
        validate_map(&self.links, "links")?;
        validate_map(&self.errors, "errors")?;
        validate_map(&self.example_pairings, "examplePairingObjects")?;
        validate_map(&self.tags, "tags")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_components_accumulation() {
        let components = Components::new()
            .with_schema("PetId", Schema::number())
            .with_content_descriptor(
                "PetIdParam",
                ContentDescriptor::new("petId", Schema::number()),
            )
            .with_error("NotFound", ErrorObject::new(1001, "Pet not found"));

        assert!(!components.is_empty());
        assert!(components.get_schema("PetId").is_some());
        assert!(components.get_content_descriptor("PetIdParam").is_some());
        assert!(components.get_error("NotFound").is_some());
        assert!(components.get_schema("Missing").is_none());
    }

    #[test]
    fn test_empty_components() {
        assert!(Components::new().is_empty());
        assert_eq!(serde_json::to_value(Components::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_components_key_validation() {
        let components = Components::new().with_schema("bad key", Schema::string());
        assert!(components.validate().is_err());

        let components = Components::new().with_schema("good-key", Schema::string());
        assert!(components.validate().is_ok());
    }

    #[test]
    fn test_invalid_child_reports_path() {
        let components =
            Components::new().with_error("Empty", ErrorObject::new(1000, ""));

        let err = components.validate().unwrap_err();
        if let crate::error::OpenRpcError::ValidationError { field_path, .. } = err {
            assert_eq!(field_path, Some("errors.Empty".to_string()));
        } else {
            panic!("Expected ValidationError with path");
        }
    }

    #[test]
    fn test_example_pairings_rename() {
        let components =
            Components::new().with_example_pairing("Default", ExamplePairing::new());

        let json_value = serde_json::to_value(&components).unwrap();
        assert!(json_value["examplePairingObjects"]["Default"].is_object());
    }

    #[test]
    fn test_components_round_trip() {
        let components = Components::new()
            .with_schema("PetId", Schema::number())
            .with_tag("pets", Tag::new("pets"));

        let json_value = serde_json::to_value(&components).unwrap();
        let parsed: Components = serde_json::from_value(json_value).unwrap();
        assert_eq!(parsed, components);
    }
}

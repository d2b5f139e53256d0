//! Reference Object for OpenRPC specification, and the inline-or-reference
//! union used wherever the spec allows either form.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// A simple object to allow referencing other components in the
/// specification, internally and externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Reference {
    /// The reference string.
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    /// Create a new reference with a custom reference string
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Create a reference to a named component of the given kind
    pub fn component(component_type: &str, name: &str) -> Self {
        Self {
            reference: format!("#/components/{}/{}", component_type, name),
        }
    }

    /// Reference a schema component
    pub fn schema(name: &str) -> Self {
        Self::component("schemas", name)
    }

    /// Reference a content descriptor component
    pub fn content_descriptor(name: &str) -> Self {
        Self::component("contentDescriptors", name)
    }

    /// Reference an error component
    pub fn error(name: &str) -> Self {
        Self::component("errors", name)
    }

    /// Reference an example component
    pub fn example(name: &str) -> Self {
        Self::component("examples", name)
    }

    /// Reference an example pairing component
    pub fn example_pairing(name: &str) -> Self {
        Self::component("examplePairingObjects", name)
    }

    /// Reference a link component
    pub fn link(name: &str) -> Self {
        Self::component("links", name)
    }

    /// Reference a tag component
    pub fn tag(name: &str) -> Self {
        Self::component("tags", name)
    }

    /// Whether this reference points inside the containing document
    pub fn is_internal(&self) -> bool {
        self.reference.starts_with('#')
    }

    /// For internal `#/components/{type}/{name}` references, the component
    /// type and name. `None` for any other reference form.
    pub fn component_parts(&self) -> Option<(&str, &str)> {
        let path = self.reference.strip_prefix("#/components/")?;
        path.split_once('/')
    }
}

impl Validate for Reference {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.reference.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("$ref"));
        }

        if let Some((component_type, name)) = self.component_parts() {
            match component_type {
                "schemas" | "contentDescriptors" | "examples" | "links" | "errors"
                | "examplePairingObjects" | "tags" => {}
                _ => {
                    return Err(crate::error::OpenRpcError::validation(format!(
                        "unknown component type in reference: {}",
                        component_type
                    )));
                }
            }

            crate::validation::validate_component_key(name)?;
        }

        Ok(())
    }
}

/// Either an inline object or a reference to one declared elsewhere.
///
/// Renders as the inline object or as a `$ref` object, per which variant is
/// held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceOr<T> {
    /// A reference to the object
    Reference(Reference),
    /// The object itself, declared inline
    Item(T),
}

impl<T> ReferenceOr<T> {
    /// Wrap an inline object
    pub fn item(item: T) -> Self {
        Self::Item(item)
    }

    /// The inline object, if this is not a reference
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Reference(_) => None,
        }
    }

    /// The reference, if this is one
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Item(_) => None,
            Self::Reference(reference) => Some(reference),
        }
    }

    /// Whether this holds a reference rather than an inline object
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl<T> From<T> for ReferenceOr<T> {
    fn from(item: T) -> Self {
        Self::Item(item)
    }
}

// A blanket `From<Reference> for ReferenceOr<T>` would collide with the
// blanket inline conversion above, so each referenceable position gets its
// own impl.
macro_rules! reference_into_reference_or {
    ($($target:ty),* $(,)?) => {
        $(impl From<Reference> for ReferenceOr<$target> {
            fn from(reference: Reference) -> Self {
                ReferenceOr::Reference(reference)
            }
        })*
    };
}

reference_into_reference_or!(
    crate::ContentDescriptor,
    crate::ErrorObject,
    crate::Link,
    crate::Method,
    crate::Tag,
);

impl<T: Validate> Validate for ReferenceOr<T> {
    fn validate(&self) -> OpenRpcResult<()> {
        match self {
            Self::Item(item) => item.validate(),
            Self::Reference(reference) => reference.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Schema;
    use serde_json::json;

    #[test]
    fn test_component_reference_constructors() {
        assert_eq!(
            Reference::schema("Pet").reference,
            "#/components/schemas/Pet"
        );
        assert_eq!(
            Reference::content_descriptor("PetId").reference,
            "#/components/contentDescriptors/PetId"
        );
        assert_eq!(Reference::tag("store").reference, "#/components/tags/store");
    }

    #[test]
    fn test_component_parts() {
        let reference = Reference::error("NotFound");
        assert_eq!(reference.component_parts(), Some(("errors", "NotFound")));

        let reference = Reference::new("https://example.com/schema.json");
        assert!(!reference.is_internal());
        assert_eq!(reference.component_parts(), None);
    }

    #[test]
    fn test_reference_validation() {
        assert!(Reference::schema("Pet").validate().is_ok());
        assert!(Reference::new("").validate().is_err());
        assert!(Reference::new("#/components/unknown/Pet").validate().is_err());
        assert!(Reference::new("#/components/schemas/bad name").validate().is_err());
    }

    #[test]
    fn test_reference_serialization() {
        let reference = Reference::schema("Pet");
        let json_value = serde_json::to_value(&reference).unwrap();
        assert_eq!(json_value, json!({"$ref": "#/components/schemas/Pet"}));
    }

    #[test]
    fn test_reference_or_renders_both_variants() {
        let inline: ReferenceOr<Schema> = Schema::string().into();
        assert_eq!(serde_json::to_value(&inline).unwrap(), json!({"type": "string"}));

        let referenced: ReferenceOr<Schema> = ReferenceOr::Reference(Reference::schema("Pet"));
        assert_eq!(
            serde_json::to_value(&referenced).unwrap(),
            json!({"$ref": "#/components/schemas/Pet"})
        );
    }

    #[test]
    fn test_reference_or_deserialization() {
        let parsed: ReferenceOr<Schema> =
            serde_json::from_value(json!({"$ref": "#/components/schemas/Pet"})).unwrap();
        assert!(parsed.is_reference());

        let parsed: ReferenceOr<Schema> = serde_json::from_value(json!({"type": "null"})).unwrap();
        assert_eq!(parsed.as_item(), Some(&Schema::null()));
    }

    #[test]
    fn test_reference_or_accessors() {
        let inline: ReferenceOr<Schema> = ReferenceOr::item(Schema::boolean());
        assert!(inline.as_item().is_some());
        assert!(inline.as_reference().is_none());
        assert!(!inline.is_reference());
    }
}

//! Info Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Metadata about the API. The metadata MAY be used by clients if needed,
/// and MAY be presented in editing or documentation generation tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Info {
    /// The title of the application.
    pub title: String,

    /// The version of the OpenRPC document (distinct from the OpenRPC
    /// specification version the document conforms to).
    pub version: String,

    /// A verbose description of the application.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A URL to the Terms of Service for the API.
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// The contact information for the exposed API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// The license information for the exposed API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Info {
    /// Create a new Info with required fields
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the terms of service URL
    pub fn with_terms_of_service(mut self, terms_of_service: impl Into<String>) -> Self {
        self.terms_of_service = Some(terms_of_service.into());
        self
    }

    /// Set the contact information
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Set the license information
    pub fn with_license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

impl Validate for Info {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.title.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("title"));
        }

        if self.version.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("version"));
        }

        if let Some(ref license) = self.license {
            license.validate()?;
        }

        Ok(())
    }
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// The identifying name of the contact person or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A URL pointing to the contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The email address of the contact person or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Create a new empty Contact
    pub fn new() -> Self {
        Self {
            name: None,
            url: None,
            email: None,
        }
    }

    /// Set the contact name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

/// License information for the exposed API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct License {
    /// The license name used for the API.
    pub name: String,

    /// A URL to the license used for the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    /// Create a new License with required name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Set the license URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Validate for License {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.name.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_creation() {
        let info = Info::new("Pet Store", "1.0.0")
            .with_description("A sample API")
            .with_license(License::new("MIT"));

        assert_eq!(info.title, "Pet Store");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.license.as_ref().unwrap().name, "MIT");
    }

    #[test]
    fn test_info_validation() {
        assert!(Info::new("Pet Store", "1.0.0").validate().is_ok());
        assert!(Info::new("", "1.0.0").validate().is_err());
        assert!(Info::new("Pet Store", "").validate().is_err());

        let info = Info::new("Pet Store", "1.0.0").with_license(License::new(""));
        assert!(info.validate().is_err());
    }

    #[test]
    fn test_info_serialization_omits_unset_fields() {
        let info = Info::new("Pet Store", "1.0.0");
        let json_value = serde_json::to_value(&info).unwrap();
        assert_eq!(json_value, json!({"title": "Pet Store", "version": "1.0.0"}));
    }

    #[test]
    fn test_terms_of_service_rename() {
        let info = Info::new("Pet Store", "1.0.0").with_terms_of_service("https://example.com/tos");
        let json_value = serde_json::to_value(&info).unwrap();
        assert_eq!(json_value["termsOfService"], "https://example.com/tos");
    }

    #[test]
    fn test_contact_fields() {
        let contact = Contact::new()
            .with_name("API Support")
            .with_email("support@example.com");

        let json_value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json_value,
            json!({"name": "API Support", "email": "support@example.com"})
        );
    }

    #[test]
    fn test_info_builder() {
        let info = Info::builder()
            .title("Pet Store".to_string())
            .version("2.0".to_string())
            .description("Second revision".to_string())
            .build();

        assert_eq!(info.version, "2.0");
        assert_eq!(info.description, Some("Second revision".to_string()));
    }
}

//! Method Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use crate::{
    ContentDescriptor, ErrorObject, ExamplePairing, ExternalDocumentation, Link, ReferenceOr,
    Server, Tag,
};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// The expected format of parameters in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamStructure {
    /// Parameters MUST be passed as a by-name object
    ByName,
    /// Parameters MUST be passed as a by-position array
    ByPosition,
    /// Either format is accepted
    #[default]
    Either,
}

impl ParamStructure {
    /// Whether this is the default `either` structure, which is omitted from
    /// rendered output.
    pub fn is_either(&self) -> bool {
        matches!(self, ParamStructure::Either)
    }
}

/// Describes one method the API exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// The canonical name for the method. The name MUST be unique within the
    /// document; names beginning with `rpc.` are reserved.
    pub name: String,

    /// A list of parameters applicable for this method, in declaration
    /// order. The order determines positional binding when `paramStructure`
    /// is `by-position`.
    #[builder(default)]
    pub params: Vec<ReferenceOr<ContentDescriptor>>,

    /// A list of tags for API documentation control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ReferenceOr<Tag>>>,

    /// A short summary of what the method does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the method behavior.
    /// GitHub Flavored Markdown syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional external documentation for this method.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// The description of the result returned by the method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ReferenceOr<ContentDescriptor>>,

    /// Declares this method to be deprecated.
    #[serde(default, skip_serializing_if = "crate::is_false")]
    #[builder(default)]
    pub deprecated: bool,

    /// An alternative servers array to service this method. Overrides the
    /// document-level servers for this method only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// A list of custom application errors this method MAY return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ReferenceOr<ErrorObject>>>,

    /// A list of possible links from this method call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ReferenceOr<Link>>>,

    /// The expected format of the parameters. Omitted from rendered output
    /// at its `either` default.
    #[serde(
        rename = "paramStructure",
        default,
        skip_serializing_if = "ParamStructure::is_either"
    )]
    #[builder(default)]
    pub param_structure: ParamStructure,

    /// Example parameter/result pairings for the method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExamplePairing>>,
}

impl Method {
    /// Create a new Method with required name and no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            tags: None,
            summary: None,
            description: None,
            external_docs: None,
            result: None,
            deprecated: false,
            servers: None,
            errors: None,
            links: None,
            param_structure: ParamStructure::Either,
            examples: None,
        }
    }

    /// Set all parameters at once
    pub fn with_params(mut self, params: Vec<ReferenceOr<ContentDescriptor>>) -> Self {
        self.params = params;
        self
    }

    /// Append a parameter, inline or by reference
    pub fn with_param(mut self, param: impl Into<ReferenceOr<ContentDescriptor>>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Append a tag
    pub fn with_tag(mut self, tag: impl Into<ReferenceOr<Tag>>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
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

    /// Set the external documentation
    pub fn with_external_docs(mut self, external_docs: ExternalDocumentation) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    /// Set the result descriptor, inline or by reference
    pub fn with_result(mut self, result: impl Into<ReferenceOr<ContentDescriptor>>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Mark the method as deprecated
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Set the method-level servers
    pub fn with_servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = Some(servers);
        self
    }

    /// Append an application error
    pub fn with_error(mut self, error: impl Into<ReferenceOr<ErrorObject>>) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(error.into());
        self
    }

    /// Append a link
    pub fn with_link(mut self, link: impl Into<ReferenceOr<Link>>) -> Self {
        self.links.get_or_insert_with(Vec::new).push(link.into());
        self
    }

    /// Set the parameter structure
    pub fn with_param_structure(mut self, param_structure: ParamStructure) -> Self {
        self.param_structure = param_structure;
        self
    }

    /// Append an example pairing
    pub fn with_example(mut self, example: ExamplePairing) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(example);
        self
    }
}

impl Validate for Method {
    fn validate(&self) -> OpenRpcResult<()> {
        crate::validation::validate_method_name(&self.name)?;

        for (index, param) in self.params.iter().enumerate() {
            param.validate().map_err(|e| {
                crate::error::OpenRpcError::validation_with_path(
                    e.to_string(),
                    format!("params[{}]", index),
                )
            })?;
        }

        if let Some(ref tags) = self.tags {
            for tag in tags {
                tag.validate()?;
            }
        }

        if let Some(ref external_docs) = self.external_docs {
            external_docs.validate()?;
        }

        if let Some(ref result) = self.result {
            result.validate()?;
        }

        if let Some(ref servers) = self.servers {
            for server in servers {
                server.validate()?;
            }
        }

        if let Some(ref errors) = self.errors {
            for error in errors {
                error.validate()?;
            }
        }

        if let Some(ref links) = self.links {
            for link in links {
                link.validate()?;
            }
        }

        if let Some(ref examples) = self.examples {
            for example in examples {
                example.validate()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Reference, Schema};
    use serde_json::json;

    #[test]
    fn test_method_creation() {
        let method = Method::new("get_pet")
            .with_summary("Fetch a pet by id")
            .with_param(ContentDescriptor::new("petId", Schema::number()).with_required(true))
            .with_result(ContentDescriptor::new("pet", Schema::object()));

        assert_eq!(method.name, "get_pet");
        assert_eq!(method.params.len(), 1);
        assert!(method.result.is_some());
    }

    #[test]
    fn test_zero_parameter_method_is_valid() {
        let method = Method::new("list_pets");
        assert!(method.params.is_empty());
        assert!(method.validate().is_ok());
    }

    #[test]
    fn test_default_param_structure_is_omitted() {
        let method = Method::new("list_pets");
        let json_value = serde_json::to_value(&method).unwrap();
        assert_eq!(json_value, json!({"name": "list_pets", "params": []}));
    }

    #[test]
    fn test_explicit_param_structure_is_rendered() {
        let method = Method::new("list_pets").with_param_structure(ParamStructure::ByPosition);
        let json_value = serde_json::to_value(&method).unwrap();
        assert_eq!(json_value["paramStructure"], "by-position");
    }

    #[test]
    fn test_deprecated_omitted_when_false() {
        let method = Method::new("list_pets");
        let json_value = serde_json::to_value(&method).unwrap();
        assert!(json_value.get("deprecated").is_none());

        let method = method.with_deprecated(true);
        let json_value = serde_json::to_value(&method).unwrap();
        assert_eq!(json_value["deprecated"], true);
    }

    #[test]
    fn test_method_with_referenced_param() {
        let method = Method::new("get_pet").with_param(Reference::content_descriptor("PetId"));
        let json_value = serde_json::to_value(&method).unwrap();
        assert_eq!(
            json_value["params"][0],
            json!({"$ref": "#/components/contentDescriptors/PetId"})
        );
    }

    #[test]
    fn test_method_validation() {
        assert!(Method::new("get_pet").validate().is_ok());
        assert!(Method::new("").validate().is_err());
        assert!(Method::new("rpc.discover").validate().is_err());

        let method =
            Method::new("get_pet").with_param(ContentDescriptor::new("", Schema::string()));
        let err = method.validate().unwrap_err();
        assert!(err.to_string().contains("Missing required field"));
    }

    #[test]
    fn test_param_structure_round_trip() {
        let method = Method::new("add").with_param_structure(ParamStructure::ByName);
        let json_value = serde_json::to_value(&method).unwrap();
        let parsed: Method = serde_json::from_value(json_value).unwrap();
        assert_eq!(parsed.param_structure, ParamStructure::ByName);

        // Absent paramStructure deserializes to the either default.
        let parsed: Method =
            serde_json::from_value(json!({"name": "add", "params": []})).unwrap();
        assert_eq!(parsed.param_structure, ParamStructure::Either);
    }
}

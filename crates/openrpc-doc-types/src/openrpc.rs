//! The root OpenRPC document object.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use crate::{Components, ExternalDocumentation, Info, Method, ReferenceOr, Server};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// The OpenRPC specification version documents default to.
pub const OPENRPC_VERSION: &str = "1.3.1";

/// The root object of an OpenRPC document, describing a whole JSON-RPC API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct OpenRpc {
    /// The semantic version number of the OpenRPC Specification that the
    /// document uses.
    #[builder(default = OPENRPC_VERSION.to_string())]
    pub openrpc: String,

    /// Metadata about the API.
    pub info: Info,

    /// The available methods for the API, inline or by reference.
    #[builder(default)]
    pub methods: Vec<ReferenceOr<Method>>,

    /// An array of servers that provide the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Reusable objects for the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Additional external documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
}

impl OpenRpc {
    /// Create a new document with the default specification version and no
    /// methods
    pub fn new(info: Info) -> Self {
        Self {
            openrpc: OPENRPC_VERSION.to_string(),
            info,
            methods: Vec::new(),
            servers: None,
            components: None,
            external_docs: None,
        }
    }

    /// Override the specification version
    pub fn with_openrpc(mut self, openrpc: impl Into<String>) -> Self {
        self.openrpc = openrpc.into();
        self
    }

    /// Append a method, inline or by reference
    pub fn with_method(mut self, method: impl Into<ReferenceOr<Method>>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Set all methods at once
    pub fn with_methods(mut self, methods: Vec<ReferenceOr<Method>>) -> Self {
        self.methods = methods;
        self
    }

    /// Append a server
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.get_or_insert_with(Vec::new).push(server);
        self
    }

    /// Set the components
    pub fn with_components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// Set the external documentation
    pub fn with_external_docs(mut self, external_docs: ExternalDocumentation) -> Self {
        self.external_docs = Some(external_docs);
        self
    }
}

impl Validate for OpenRpc {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.openrpc.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("openrpc"));
        }

        self.info.validate().map_err(|e| {
            crate::error::OpenRpcError::validation_with_path(e.to_string(), "info")
        })?;

        for (index, method) in self.methods.iter().enumerate() {
            method.validate().map_err(|e| {
                crate::error::OpenRpcError::validation_with_path(
                    e.to_string(),
                    format!("methods[{}]", index),
                )
            })?;
        }

        if let Some(ref servers) = self.servers {
            for server in servers {
                server.validate()?;
            }
        }

        if let Some(ref components) = self.components {
            components.validate()?;
        }

        if let Some(ref external_docs) = self.external_docs {
            external_docs.validate()?;
        }

        Ok(())
    }
}

//! Reflection of callable signatures into method descriptions.

use crate::schema::{TypeExpr, schema};
use crate::signature::{FunctionSignature, ParameterKind, ParameterSpec};
use openrpc_doc_types::error::{OpenRpcError, OpenRpcResult};
use openrpc_doc_types::{ContentDescriptor, Method as MethodObject};
use serde::{Deserialize, Serialize};

/// One reflected parameter of a callable.
///
/// Created once per signature parameter during reflection and immutable
/// thereafter. The annotation is carried unevaluated; schema mapping runs
/// only when the parameter is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// The parameter identifier.
    pub name: String,

    /// The declared type annotation, unevaluated.
    pub annotation: TypeExpr,

    /// Whether the parameter is required. Derived from the absence of a
    /// default value.
    pub required: bool,

    /// Whether the parameter may only be supplied by position.
    pub positional_only: bool,
}

impl Param {
    fn from_spec(spec: &ParameterSpec) -> OpenRpcResult<Self> {
        if spec.kind.is_variadic() {
            return Err(OpenRpcError::unsupported_parameter(
                spec.name.clone(),
                spec.kind.to_string(),
            ));
        }

        Ok(Self {
            name: spec.name.clone(),
            annotation: spec.annotation.clone(),
            required: !spec.has_default,
            positional_only: spec.kind == ParameterKind::PositionalOnly,
        })
    }

    /// Render this parameter as a Content Descriptor Object.
    ///
    /// This is where an unsupported annotation surfaces as
    /// [`OpenRpcError::UnsupportedType`].
    pub fn to_content_descriptor(&self) -> OpenRpcResult<ContentDescriptor> {
        Ok(ContentDescriptor::new(&self.name, schema(&self.annotation)?)
            .with_required(self.required))
    }
}

/// A method derived from exactly one callable description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// The method name, taken from the callable's name.
    pub name: String,

    /// The reflected parameters, in declaration order.
    pub params: Vec<Param>,

    /// The declared return annotation, unevaluated; absent when the
    /// callable declares none.
    pub return_annotation: Option<TypeExpr>,
}

impl Method {
    /// Reflect a callable description into a Method.
    ///
    /// Parameters keep their declaration order. A callable with no
    /// parameters yields an empty parameter list. Variadic parameter kinds
    /// fail with [`OpenRpcError::UnsupportedParameterKind`]; annotations
    /// are not schema-mapped here, so an unsupported annotation does not
    /// prevent construction.
    pub fn from_signature(signature: &FunctionSignature) -> OpenRpcResult<Self> {
        let params = signature
            .parameters
            .iter()
            .map(Param::from_spec)
            .collect::<OpenRpcResult<Vec<_>>>()?;

        Ok(Self {
            name: signature.name.clone(),
            params,
            return_annotation: signature.return_annotation.clone(),
        })
    }

    /// Render this method as a document-model Method Object.
    ///
    /// Parameters become inline content descriptors; the return annotation,
    /// when present, becomes a content descriptor named `result`. Schema
    /// mapping runs here, so unsupported annotations fail the render, not
    /// the earlier reflection.
    pub fn to_method_object(&self) -> OpenRpcResult<MethodObject> {
        let mut method = MethodObject::new(&self.name);

        for param in &self.params {
            method = method.with_param(param.to_content_descriptor()?);
        }

        if let Some(ref return_annotation) = self.return_annotation {
            method = method.with_result(ContentDescriptor::new(
                "result",
                schema(return_annotation)?,
            ));
        }

        Ok(method)
    }
}

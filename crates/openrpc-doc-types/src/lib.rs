//! In-memory document model for the OpenRPC specification.
//!
//! Every object defined by the specification is represented as a plain data
//! record. Optional fields are `Option<T>` and are omitted from rendered
//! output when unset; the `required` and `deprecated` booleans are
//! additionally omitted when `false`. Wherever the specification allows an
//! object or a `$ref` to one, fields hold a [`ReferenceOr`].
//!
//! Construction is permissive: spec conformance checks live behind the
//! opt-in [`validation::Validate`] trait.

pub mod error;
pub mod validation;

mod components;
mod content_descriptor;
mod error_object;
mod example;
mod external_documentation;
mod info;
mod link;
mod method;
mod openrpc;
mod reference;
mod schema;
mod server;
mod tag;

pub use components::Components;
pub use content_descriptor::ContentDescriptor;
pub use error_object::{ErrorObject, error_codes};
pub use example::{Example, ExamplePairing};
pub use external_documentation::ExternalDocumentation;
pub use info::{Contact, Info, License};
pub use link::{Link, RuntimeExpression};
pub use method::{Method, ParamStructure};
pub use openrpc::{OPENRPC_VERSION, OpenRpc};
pub use reference::{Reference, ReferenceOr};
pub use schema::{JsonType, Schema, SchemaType};
pub use server::{Server, ServerVariable};
pub use tag::Tag;

/// serde `skip_serializing_if` helper for the omit-if-false boolean fields.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

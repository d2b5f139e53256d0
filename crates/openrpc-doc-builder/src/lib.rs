//! Derives OpenRPC method and schema descriptions from declarative callable
//! signatures.
//!
//! The embedding application describes each callable ahead of time as a
//! [`FunctionSignature`] (name, ordered parameters, optional return
//! annotation). [`Method::from_signature`] reflects a description into a
//! method whose parameters carry their annotations unevaluated; rendering
//! to the document model (and any schema-mapping failure) happens lazily
//! via [`Method::to_method_object`]. An [`OpenRpcBuilder`] accumulates
//! reflected methods for a document.
//!
//! ```
//! use openrpc_doc_builder::{
//!     FunctionSignature, Method, OpenRpcBuilder, ParameterSpec, TypeExpr,
//! };
//!
//! let signature = FunctionSignature::new("get_pet")
//!     .with_parameter(ParameterSpec::new("pet_id", TypeExpr::int()))
//!     .with_return(TypeExpr::str());
//!
//! let builder = OpenRpcBuilder::new("pet-store", "1.0.0")
//!     .add_method(Method::from_signature(&signature).unwrap());
//!
//! assert_eq!(builder.methods()[0].name, "get_pet");
//! ```

mod builder;
mod method;
mod schema;
mod signature;

pub use builder::OpenRpcBuilder;
pub use method::{Method, Param};
pub use schema::{PrimitiveType, TypeExpr, schema};
pub use signature::{FunctionSignature, ParameterKind, ParameterSpec};

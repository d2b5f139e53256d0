//! Accumulation of reflected methods into a growing document description.

use crate::method::Method;
use serde::{Deserialize, Serialize};

/// Accumulates reflected methods under a document name and version.
///
/// The builder owns its method sequence exclusively and preserves insertion
/// order. It performs no deduplication and no validation of the name or
/// version; assembling the accumulated methods into a root document is the
/// caller's job, via the document model.
///
/// A builder instance belongs to one document-assembly task; concurrent
/// producers need external synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRpcBuilder {
    /// The document name.
    pub name: String,

    /// The document version.
    pub version: String,

    /// The accumulated methods, in insertion order.
    pub methods: Vec<Method>,
}

impl OpenRpcBuilder {
    /// Create a new builder with an empty method sequence
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            methods: Vec::new(),
        }
    }

    /// Append a method, returning the builder for chaining. Always
    /// succeeds; adding the same method twice produces two entries.
    pub fn add_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// The accumulated methods
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

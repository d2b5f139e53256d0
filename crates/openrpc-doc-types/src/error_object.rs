//! Error Object for OpenRPC specification.

use crate::error::OpenRpcResult;
use crate::validation::Validate;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Defines an application level error a method may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct ErrorObject {
    /// A Number that indicates the error type that occurred. This MUST be an
    /// integer. Codes from and including -32768 to -32000 are reserved for
    /// pre-defined JSON-RPC errors.
    pub code: i64,

    /// A String providing a short description of the error.
    /// The message SHOULD be limited to a concise single sentence.
    pub message: String,

    /// A Primitive or Structured value that contains additional information
    /// about the error. The value of this member is defined by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Create a new ErrorObject with required fields
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Set the data field
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Whether this error code falls in the JSON-RPC reserved range
    pub fn is_reserved_code(&self) -> bool {
        error_codes::is_reserved(self.code)
    }

    /// Create a parse error (-32700)
    pub fn parse_error() -> Self {
        Self::new(error_codes::PARSE_ERROR, "Parse error")
    }

    /// Create an invalid request error (-32600)
    pub fn invalid_request() -> Self {
        Self::new(error_codes::INVALID_REQUEST, "Invalid Request")
    }

    /// Create a method not found error (-32601)
    pub fn method_not_found() -> Self {
        Self::new(error_codes::METHOD_NOT_FOUND, "Method not found")
    }

    /// Create an invalid params error (-32602)
    pub fn invalid_params() -> Self {
        Self::new(error_codes::INVALID_PARAMS, "Invalid params")
    }

    /// Create an internal error (-32603)
    pub fn internal_error() -> Self {
        Self::new(error_codes::INTERNAL_ERROR, "Internal error")
    }
}

impl Validate for ErrorObject {
    fn validate(&self) -> OpenRpcResult<()> {
        if self.message.is_empty() {
            return Err(crate::error::OpenRpcError::missing_field("message"));
        }
        Ok(())
    }
}

/// Pre-defined JSON-RPC error codes
pub mod error_codes {
    /// Parse error - invalid JSON was received by the server
    pub const PARSE_ERROR: i64 = -32700;

    /// Invalid Request - the JSON sent is not a valid Request object
    pub const INVALID_REQUEST: i64 = -32600;

    /// Method not found - the method does not exist / is not available
    pub const METHOD_NOT_FOUND: i64 = -32601;

    /// Invalid params - invalid method parameter(s)
    pub const INVALID_PARAMS: i64 = -32602;

    /// Internal error - internal JSON-RPC error
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Reserved error range start
    pub const RESERVED_MIN: i64 = -32768;

    /// Reserved error range end
    pub const RESERVED_MAX: i64 = -32000;

    /// Check if an error code is reserved
    pub fn is_reserved(code: i64) -> bool {
        (RESERVED_MIN..=RESERVED_MAX).contains(&code)
    }
}

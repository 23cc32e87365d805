//! Error types for RPC operations.

use thiserror::Error;

/// Errors that can occur while talking to a node.
#[derive(Error, Debug)]
pub enum RpcError {
    /// Transport-level failure: connection refused, timeout, TLS.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered, but not with a usable JSON-RPC envelope.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// The node rejected the request (unknown block, malformed hash, ...).
    ///
    /// Carries the JSON-RPC error code and message exactly as reported.
    #[error("Server error {code}: {message}")]
    Server {
        /// JSON-RPC error code.
        code: i64,
        /// Error message.
        message: String,
    },

    /// Invalid client-side parameters, e.g. unusable auth credentials.
    #[error("Invalid parameters: {message}")]
    InvalidParams {
        /// Error message.
        message: String,
    },

    /// Serialization error while decoding a typed result.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RpcError {
    /// Create an invalid response error.
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a server error.
    pub fn server<S: Into<String>>(code: i64, message: S) -> Self {
        Self::Server {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid params error.
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RpcError, RpcResult};

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Response ID, echoing the request
    pub id: Value,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Error if the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcResponseError>,

    /// Result if the call succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl RpcResponse {
    /// Folds the envelope into its bare `result` member.
    ///
    /// An `error` member always wins over `result`; a response carrying
    /// neither is invalid.
    pub fn into_result(self) -> RpcResult<Value> {
        if let Some(error) = self.error {
            return Err(RpcError::server(error.code, error.message));
        }
        self.result
            .ok_or_else(|| RpcError::invalid_response("response carries neither result nor error"))
    }
}

/// JSON-RPC error object reported by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

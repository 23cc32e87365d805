use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deploy returned by `getdeploy` and `getdeploys`.
///
/// The summary view carries the hash and header only; payment, session,
/// approvals and the execution result appear in the full view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcDeploy {
    /// Deploy hash, base16 encoded
    pub hash: String,

    /// Deploy header
    pub header: RpcDeployHeader,

    /// Payment code (full view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Value>,

    /// Session code (full view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,

    /// Approvals from the signing accounts (full view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals: Option<Vec<RpcApproval>>,

    /// Outcome of executing the deploy, absent while pending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_result: Option<RpcExecutionResult>,
}

/// Header carried by every deploy view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcDeployHeader {
    /// Public key of the creating account, base16 encoded
    pub account: String,

    /// Creation time, milliseconds since the Unix epoch
    pub timestamp_ms: u64,

    /// Time to live, milliseconds
    pub ttl_ms: u64,

    /// Conversion rate between the cost unit and the payment unit
    pub gas_price: u64,

    /// Hash of the deploy body
    pub body_hash: String,

    /// Hashes of deploys that must be executed first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Name of the chain the deploy targets
    pub chain_name: String,
}

/// Signature of one account over a deploy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcApproval {
    /// Public key of the signer, base16 encoded
    pub signer: String,

    /// Signature over the deploy hash
    pub signature: String,
}

/// Outcome of executing a deploy inside a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcExecutionResult {
    /// Cost of the execution in gas
    pub cost: u64,

    /// Failure message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

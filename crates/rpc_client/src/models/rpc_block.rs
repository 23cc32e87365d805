use serde::{Deserialize, Serialize};

/// Block summary returned by `getblock` and `getblocks`.
///
/// The full-view-only fields are `None` when the node was asked for the
/// summary view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcBlock {
    /// Block hash, base16 encoded
    pub hash: String,

    /// Block header
    pub header: RpcBlockHeader,

    /// Number of deploys included in the block
    pub deploy_count: u32,

    /// Hashes of the included deploys (full view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_hashes: Option<Vec<String>>,

    /// Proposer's signature over the block (full view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposer_signature: Option<String>,
}

/// Header carried by every block view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcBlockHeader {
    /// Hash of the parent block, base16 encoded
    pub parent_hash: String,

    /// Global state root hash after executing the block
    pub state_root_hash: String,

    /// Hash of the block body
    pub body_hash: String,

    /// Distance from the genesis block
    pub height: u64,

    /// Creation time, milliseconds since the Unix epoch
    pub timestamp_ms: u64,

    /// Protocol version the block was created under
    pub protocol_version: String,

    /// Public key of the validator that proposed the block
    pub proposer: String,
}

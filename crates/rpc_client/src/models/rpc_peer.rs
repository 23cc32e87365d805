use serde::{Deserialize, Serialize};

/// Peer entry returned by `getpeers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcPeer {
    /// Node ID of the peer, base16 encoded
    pub node_id: String,

    /// Network address of the peer, `host:port`
    pub address: String,
}

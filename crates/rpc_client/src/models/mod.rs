//! Typed models for node queries and responses.
//!
//! One file per model, mirroring the node's wire vocabulary. All models
//! tolerate unknown incoming fields so a newer node does not break an
//! older client.

mod rpc_block;
mod rpc_deploy;
mod rpc_peer;
mod rpc_request;
mod rpc_response;

pub use rpc_block::{RpcBlock, RpcBlockHeader};
pub use rpc_deploy::{RpcApproval, RpcDeploy, RpcDeployHeader, RpcExecutionResult};
pub use rpc_peer::RpcPeer;
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};

//! # Caspian RPC client
//!
//! JSON-RPC 2.0 client for querying Caspian blockchain nodes over HTTP.
//!
//! This crate provides:
//! - [`RpcClient`], a thin asynchronous client with one typed method per
//!   node query
//! - Typed request/response models for blocks, deploys and peers
//!
//! The client is strictly read-only: it issues queries and decodes the
//! answers. It never validates chain data locally, never retries, and
//! forwards identifiers (block and deploy hashes) to the node verbatim.
//!
//! ## Example
//!
//! ```rust,ignore
//! use caspian_rpc_client::RpcClient;
//!
//! let client = RpcClient::new("http://localhost:7777/rpc".parse()?)?;
//! let deploys = client.get_block_deploys("da39a3ee...", false).await?;
//! ```

pub mod error;
pub mod models;
mod rpc_client;

pub use error::{RpcError, RpcResult};
pub use rpc_client::{RpcClient, RpcClientBuilder};

// Re-export commonly used types
pub use models::{
    RpcApproval, RpcBlock, RpcBlockHeader, RpcDeploy, RpcDeployHeader, RpcExecutionResult, RpcPeer,
    RpcRequest, RpcResponse, RpcResponseError,
};

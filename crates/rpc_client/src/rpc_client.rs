use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use crate::error::{RpcError, RpcResult};
use crate::models::{RpcBlock, RpcDeploy, RpcPeer, RpcRequest, RpcResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The RPC client to call Caspian node methods.
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

/// Builder for [`RpcClient`].
pub struct RpcClientBuilder {
    base_address: Url,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl RpcClientBuilder {
    fn new(base_address: Url) -> Self {
        Self {
            base_address,
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Authenticates every request with HTTP basic auth.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Overrides the default 30 second request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> RpcResult<RpcClient> {
        let mut builder = Client::builder().timeout(self.timeout);

        if let Some((username, password)) = self.credentials {
            let auth = format!("{}:{}", username, password);
            let encoded = general_purpose::STANDARD.encode(auth.as_bytes());
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", encoded).parse().map_err(|_| {
                    RpcError::invalid_params("credentials contain characters not allowed in headers")
                })?,
            );
            builder = builder.default_headers(headers);
        }

        Ok(RpcClient {
            base_address: self.base_address,
            http_client: builder.build()?,
            next_id: AtomicU64::new(1),
        })
    }
}

impl RpcClient {
    /// Starts building a client that talks to `base_address`.
    pub fn builder(base_address: Url) -> RpcClientBuilder {
        RpcClientBuilder::new(base_address)
    }

    /// Creates a client with default settings.
    pub fn new(base_address: Url) -> RpcResult<Self> {
        RpcClientBuilder::new(base_address).build()
    }

    /// Address of the node this client talks to.
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Sends a single RPC request and returns the bare result.
    pub async fn send(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        tracing::debug!(method, id, "sending RPC request");

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await?;

        let content = response.text().await?;
        let response: RpcResponse = serde_json::from_str(&content).map_err(|err| {
            RpcError::invalid_response(format!("malformed JSON-RPC envelope: {}", err))
        })?;

        if let Some(error) = &response.error {
            tracing::debug!(method, id, code = error.code, "received RPC error response");
        } else {
            tracing::debug!(method, id, "received RPC response");
        }

        response.into_result()
    }

    // Chain methods

    /// Returns one block by its base16 hash.
    ///
    /// A full view carries deploy hashes and the proposer signature; the
    /// summary view carries the header only.
    pub async fn get_block(&self, block_hash: &str, full_view: bool) -> RpcResult<RpcBlock> {
        let result = self
            .send("getblock", vec![json!(block_hash), json!(full_view)])
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Returns the most recent blocks of the main chain, tip first.
    pub async fn get_blocks(&self, depth: u64, full_view: bool) -> RpcResult<Vec<RpcBlock>> {
        let result = self
            .send("getblocks", vec![json!(depth), json!(full_view)])
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Returns one deploy by its base16 hash.
    pub async fn get_deploy(&self, deploy_hash: &str, full_view: bool) -> RpcResult<RpcDeploy> {
        let result = self
            .send("getdeploy", vec![json!(deploy_hash), json!(full_view)])
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Returns the deploys included in the block with the given base16 hash.
    pub async fn get_block_deploys(
        &self,
        block_hash: &str,
        full_view: bool,
    ) -> RpcResult<Vec<RpcDeploy>> {
        let result = self
            .send("getdeploys", vec![json!(block_hash), json!(full_view)])
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Returns the peers the node is currently connected to.
    pub async fn get_peers(&self) -> RpcResult<Vec<RpcPeer>> {
        let result = self.send("getpeers", vec![]).await?;
        Ok(serde_json::from_value(result)?)
    }
}

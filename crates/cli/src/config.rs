//! Client configuration loaded from an optional TOML file.
//!
//! Resolution order: built-in defaults, then file values, then command-line
//! flags. A `--config` path that does not exist is an error rather than a
//! silent fallback.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_URL: &str = "http://localhost:7777/rpc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Node connection settings
    #[serde(default)]
    pub node: NodeConfig,
}

/// The `[node]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// JSON-RPC endpoint of the node
    #[serde(default = "default_node_url")]
    pub url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Basic auth user name, sent only when the password is also set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_user: Option<String>,

    /// Basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_pass: Option<String>,
}

fn default_node_url() -> String {
    DEFAULT_NODE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: default_node_url(),
            timeout_secs: default_timeout_secs(),
            rpc_user: None,
            rpc_pass: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse configuration file '{}'", path.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, node_url: Option<&str>, timeout_secs: Option<u64>) {
        if let Some(url) = node_url {
            self.node.url = url.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.node.timeout_secs = secs;
        }
    }

    /// Validates the resolved configuration.
    pub fn validate(&self) -> Result<()> {
        if self.node.url.is_empty() {
            anyhow::bail!("node url cannot be empty");
        }
        if self.node.timeout_secs == 0 {
            anyhow::bail!("timeout must be at least one second");
        }
        Ok(())
    }
}

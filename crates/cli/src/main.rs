mod commands;
mod config;
mod guard;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use caspian_rpc_client::RpcClient;
use clap::{Parser, Subcommand};
use config::ClientConfig;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use commands::CommandResult;

/// Command-line arguments for the Caspian CLI
#[derive(Parser, Debug)]
#[command(
    name = "caspian-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Command-line client for Caspian blockchain nodes"
)]
struct Cli {
    /// Node JSON-RPC endpoint (defaults to http://localhost:7777/rpc)
    #[arg(long, env = "CASPIAN_NODE_URL", value_name = "URL")]
    node_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,

    /// Raises the log filter, once per occurrence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// View deploys included in a block.
    ShowDeploys {
        /// Value of the block hash, base16 encoded.
        #[arg(long, value_name = "HASH")]
        hash: String,
    },

    /// View properties of a deploy.
    ShowDeploy {
        /// Value of the deploy hash, base16 encoded.
        #[arg(long, value_name = "HASH")]
        hash: String,
    },

    /// View properties of a block.
    ShowBlock {
        /// Value of the block hash, base16 encoded.
        #[arg(long, value_name = "HASH")]
        hash: String,
    },

    /// View the most recent blocks of the chain.
    ShowBlocks {
        /// Number of blocks to show, counted back from the tip.
        #[arg(long, value_name = "N", default_value_t = 1)]
        depth: u64,
    },

    /// View peers connected to the node.
    ShowPeers,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    guard::run(run_command(cli)).await
}

async fn run_command(cli: Cli) -> CommandResult {
    let config = resolve_config(&cli)?;
    let client = build_client(&config)?;
    tracing::debug!(url = %config.node.url, "connecting to node");

    match cli.command {
        Commands::ShowDeploys { hash } => commands::show_deploys::execute(&client, &hash).await,
        Commands::ShowDeploy { hash } => commands::show_deploy::execute(&client, &hash).await,
        Commands::ShowBlock { hash } => commands::show_block::execute(&client, &hash).await,
        Commands::ShowBlocks { depth } => commands::show_blocks::execute(&client, depth).await,
        Commands::ShowPeers => commands::show_peers::execute(&client).await,
    }
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    config.apply_overrides(cli.node_url.as_deref(), cli.timeout_secs);
    config.validate()?;
    Ok(config)
}

fn build_client(config: &ClientConfig) -> Result<RpcClient> {
    let url = Url::parse(&config.node.url)
        .with_context(|| format!("invalid node url '{}'", config.node.url))?;

    let mut builder =
        RpcClient::builder(url).timeout(Duration::from_secs(config.node.timeout_secs));

    if let (Some(user), Some(pass)) = (&config.node.rpc_user, &config.node.rpc_pass) {
        builder = builder.basic_auth(user.as_str(), pass.as_str());
    }

    Ok(builder.build()?)
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_connection_flags_unset() {
        let cli = Cli::parse_from(["caspian-cli", "show-peers"]);
        assert!(cli.node_url.is_none());
        assert!(cli.config.is_none());
        assert!(cli.timeout_secs.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::ShowPeers));
    }

    #[test]
    fn show_deploys_requires_hash() {
        let result = Cli::try_parse_from(["caspian-cli", "show-deploys"]);
        assert!(result.is_err());
    }

    #[test]
    fn show_deploys_takes_hash_verbatim() {
        let cli = Cli::parse_from([
            "caspian-cli",
            "show-deploys",
            "--hash",
            "not-even-base16!",
        ]);
        match cli.command {
            Commands::ShowDeploys { hash } => assert_eq!(hash, "not-even-base16!"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn connection_flags_come_before_the_subcommand() {
        let cli = Cli::parse_from([
            "caspian-cli",
            "--node-url",
            "http://node.example:7777/rpc",
            "--timeout-secs",
            "5",
            "-vv",
            "show-blocks",
            "--depth",
            "12",
        ]);
        assert_eq!(cli.node_url.as_deref(), Some("http://node.example:7777/rpc"));
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::ShowBlocks { depth } => assert_eq!(depth, 12),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_blocks_depth_defaults_to_one() {
        let cli = Cli::parse_from(["caspian-cli", "show-blocks"]);
        match cli.command {
            Commands::ShowBlocks { depth } => assert_eq!(depth, 1),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resolve_config_without_file_uses_defaults() {
        let cli = Cli::parse_from(["caspian-cli", "show-peers"]);
        let config = resolve_config(&cli).expect("config");
        assert_eq!(config.node.url, config::DEFAULT_NODE_URL);
        assert_eq!(config.node.timeout_secs, config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn resolve_config_prefers_flag_values() {
        let cli = Cli::parse_from([
            "caspian-cli",
            "--node-url",
            "http://override:1234/rpc",
            "--timeout-secs",
            "3",
            "show-peers",
        ]);
        let config = resolve_config(&cli).expect("config");
        assert_eq!(config.node.url, "http://override:1234/rpc");
        assert_eq!(config.node.timeout_secs, 3);
    }
}

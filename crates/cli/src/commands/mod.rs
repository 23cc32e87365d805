//! CLI command implementations
//!
//! Each submodule implements a specific CLI command that queries the
//! Caspian node via RPC.

pub mod show_block;
pub mod show_blocks;
pub mod show_deploy;
pub mod show_deploys;
pub mod show_peers;

use anyhow::Result;

/// Common result type for CLI commands
pub type CommandResult = Result<String>;

//! show-deploys command - lists the deploys included in a block

use caspian_rpc_client::RpcClient;

use super::CommandResult;
use crate::output;

/// Fetches the summary view of every deploy in the block and renders the
/// list. The hash is handed to the node verbatim; a malformed value comes
/// back as a node-side error.
pub async fn execute(client: &RpcClient, block_hash: &str) -> CommandResult {
    let deploys = client.get_block_deploys(block_hash, false).await?;
    output::render_elements(&deploys, "deploy")
}

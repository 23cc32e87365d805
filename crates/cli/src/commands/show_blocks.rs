//! show-blocks command - lists the most recent blocks of the chain

use caspian_rpc_client::RpcClient;

use super::CommandResult;
use crate::output;

pub async fn execute(client: &RpcClient, depth: u64) -> CommandResult {
    let blocks = client.get_blocks(depth, false).await?;
    output::render_elements(&blocks, "block")
}

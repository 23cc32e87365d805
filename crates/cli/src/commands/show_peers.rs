//! show-peers command - lists the node's active peers

use caspian_rpc_client::RpcClient;

use super::CommandResult;
use crate::output;

pub async fn execute(client: &RpcClient) -> CommandResult {
    let peers = client.get_peers().await?;
    output::render_elements(&peers, "peer")
}

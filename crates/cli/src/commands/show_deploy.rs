//! show-deploy command - retrieves one deploy with its full payload

use caspian_rpc_client::RpcClient;

use super::CommandResult;
use crate::output;

pub async fn execute(client: &RpcClient, deploy_hash: &str) -> CommandResult {
    let deploy = client.get_deploy(deploy_hash, true).await?;
    output::render_single(&deploy)
}

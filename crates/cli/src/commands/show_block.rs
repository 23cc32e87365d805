//! show-block command - retrieves block information

use caspian_rpc_client::RpcClient;

use super::CommandResult;
use crate::output;

pub async fn execute(client: &RpcClient, block_hash: &str) -> CommandResult {
    let block = client.get_block(block_hash, true).await?;
    output::render_single(&block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::net::TcpListener;
    use url::Url;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn requests_the_full_view() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "hash": "0707",
                "header": {
                    "parent_hash": "0101",
                    "state_root_hash": "0202",
                    "body_hash": "0303",
                    "height": 42,
                    "timestamp_ms": 1_603_200_000_000u64,
                    "protocol_version": "1.0.0",
                    "proposer": "0404",
                },
                "deploy_count": 2,
                "deploy_hashes": ["aa00", "bb11"],
                "proposer_signature": "0c0d",
            },
        });
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(
                r#""method"\s*:\s*"getblock".*"params"\s*:\s*\[\s*"0707"\s*,\s*true\s*\]"#
                    .to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let url = Url::parse(&server.url()).expect("server url");
        let client = RpcClient::builder(url).build().expect("client");
        let rendered = execute(&client, "0707").await.expect("output");

        assert!(rendered.contains("\"height\": 42"));
        assert!(rendered.contains("\"proposer_signature\": \"0c0d\""));
    }
}

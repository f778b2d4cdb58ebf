//! Integration tests: bring up the chain node and the mint service on
//! ephemeral ports and talk raw HTTP/1.1 to them.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::node::{MintConfig, MintNode, Node, NodeConfig};
use crate::rpc::RpcServer;
use crate::utils::KuberError;

/// Send one request with `Connection: close` and split the reply.
async fn http(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(req.as_bytes()).await.unwrap();
    stream.flush().await.unwrap();

    let mut raw = String::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_string(&mut raw))
        .await
        .expect("response timed out")
        .unwrap();

    let status: u16 = raw
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line");
    let body = raw.split_once("\r\n\r\n").map(|(_, b)| b.to_string()).unwrap_or_default();
    (status, body)
}

fn local_node_config() -> NodeConfig {
    NodeConfig { host: "127.0.0.1".into(), port: 0 }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_node_serves_health_and_rpc() {
    let (svc, addr) = Node::new(local_node_config()).start().await.unwrap();

    let (status, body) = http(addr, "GET", "/health", "").await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"service":"kuber-chain","status":"ok"}"#);

    let (status, body) = http(
        addr,
        "POST",
        "/rpc",
        r#"{"jsonrpc":"2.0","id":42,"method":"getBlock","params":[]}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"jsonrpc":"2.0","id":42,"result":"stub-response"}"#);

    let (status, body) = http(addr, "POST", "/rpc", "garbage{").await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"jsonrpc":"2.0","id":null,"result":"stub-response"}"#);

    svc.shutdown().await.unwrap();
    assert!(TcpStream::connect(addr).await.is_err(), "listener should be closed");
}

#[tokio::test]
async fn test_node_start_fails_on_taken_port() {
    let holder = RpcServer::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let cfg = NodeConfig { host: "127.0.0.1".into(), port: holder.local_addr().port() };

    match Node::new(cfg).start().await {
        Err(KuberError::Bind { addr, .. }) => assert_eq!(addr, holder.local_addr()),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("second bind on the same port should fail"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_mint_node_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = MintConfig {
        host: "127.0.0.1".into(),
        port: 0,
        data_dir: dir.path().join("tokens"),
    };
    let (svc, addr) = MintNode::new(cfg).start().await.unwrap();

    let (status, body) = http(addr, "GET", "/health", "").await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"status":"ok","service":"kuber-nft-mint"}"#);

    let (status, body) =
        http(addr, "POST", "/mint", r#"{"owner":"0x01","metadata":{"uri":"ipfs://x"}}"#).await;
    assert_eq!(status, 200);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    let id = v["token"]["id"].as_str().unwrap();
    assert!(dir.path().join("tokens").join(format!("{id}.json")).exists());

    let (status, _) = http(addr, "POST", "/mint", r#"{"owner":"0x01"}"#).await;
    assert_eq!(status, 400);

    svc.shutdown().await.unwrap();
}

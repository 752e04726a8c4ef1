//! One-shot `send` through the real adapters against a local HTTP stub.

#![allow(clippy::unwrap_used, missing_docs)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use req_cli::App;
use req_infrastructure::ReqwestHttpClient;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn spawn_pong_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\nConnection: close\r\n\r\npong")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

async fn load(config: &Path) -> App {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    App::load_with_client(config, Arc::new(ReqwestHttpClient::with_client(client)))
        .await
        .unwrap()
}

#[tokio::test]
async fn send_alias_prints_json_outcomes() {
    let addr = spawn_pong_server().await;
    let dir = TempDir::new().unwrap();
    let request = dir.path().join("ping.yml");
    std::fs::write(
        &request,
        "request:\n  method: GET\n  target: /ping\nassertions:\n  - name: status\n    condition: res.code == 200\n  - name: wrong body\n    condition: res.body == ping\n",
    )
    .unwrap();
    let config = dir.path().join(".reqrc");
    std::fs::write(
        &config,
        format!(
            "root = {root:?}\nbase_url = \"http://{addr}\"\n\n[aliases]\nping = {request:?}\n",
            root = dir.path().display().to_string(),
            request = request.display().to_string(),
        ),
    )
    .unwrap();

    let app = load(&config).await;
    let mut out = Vec::new();
    let passed = app.send_and_print("ping", true, &mut out).await.unwrap();

    assert!(!passed);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let run = &json[0]["result"]["run"];
    assert_eq!(run["exchange"]["request"]["url"], format!("http://{addr}/ping"));
    assert_eq!(run["exchange"]["response"]["body"], "pong");
    assert_eq!(run["report"]["passed"], 1);
    assert_eq!(run["report"]["failed"], 1);
}

#[tokio::test]
async fn unknown_alias_without_matches_is_an_error() {
    let dir = TempDir::new().unwrap();
    let app = load(&dir.path().join(".reqrc")).await;

    let result = app
        .send_and_print(&format!("{}/*.yml", dir.path().display()), false, &mut Vec::new())
        .await;
    assert!(result.is_err());
}

#![allow(clippy::unwrap_used, clippy::panic)]

use rust_decimal_macros::dec;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use super::*;

const BODY: &str = r#"{
    "balance": { "income": 500, "outcome": 150, "total": 350 },
    "transactions": [
        { "id": "1", "title": "Salary", "value": 500, "type": "income",
          "category": { "title": "Job" }, "created_at": "2021-05-10 10:00:00.000" },
        { "id": "2", "title": "Groceries", "value": 150, "type": "outcome",
          "category": { "title": "Food" }, "created_at": "2021-05-11 18:30:00.000" }
    ]
}"#;

/// Serve exactly one canned HTTP response; the handle yields the raw request.
async fn serve_once(status: &str, body: &str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    let url = Url::parse(&format!("http://{addr}")).unwrap();
    (url, handle)
}

// ── URL building ──────────────────────────────────────────────

#[test]
fn test_transactions_url_root() {
    let client = ApiClient::new(Url::parse("http://localhost:3333").unwrap(), None);
    assert_eq!(
        client.transactions_url().unwrap().as_str(),
        "http://localhost:3333/transactions"
    );
}

#[test]
fn test_transactions_url_keeps_prefix() {
    let client = ApiClient::new(Url::parse("https://example.com/api").unwrap(), None);
    assert_eq!(
        client.transactions_url().unwrap().as_str(),
        "https://example.com/api/transactions"
    );

    let client = ApiClient::new(Url::parse("https://example.com/api/").unwrap(), None);
    assert_eq!(
        client.transactions_url().unwrap().as_str(),
        "https://example.com/api/transactions"
    );
}

// ── fetch_transactions ────────────────────────────────────────

#[tokio::test]
async fn test_fetch_success() {
    let (url, server) = serve_once("200 OK", BODY).await;
    let client = ApiClient::new(url, None);

    let resp = client.fetch_transactions().await.unwrap();
    assert_eq!(resp.balance.total, dec!(350));
    assert_eq!(resp.transactions.len(), 2);
    assert_eq!(resp.transactions[0].title, "Salary");
    assert_eq!(resp.transactions[1].title, "Groceries");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /transactions HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn test_fetch_sends_bearer_token() {
    let (url, server) = serve_once("200 OK", BODY).await;
    let client = ApiClient::new(url, Some("secret".into()));

    client.fetch_transactions().await.unwrap();

    let request = server.await.unwrap().to_lowercase();
    assert!(request.contains("authorization: bearer secret"), "{request}");
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let (url, _server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = ApiClient::new(url, None);

    match client.fetch_transactions().await {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_malformed_payload() {
    let (url, _server) = serve_once("200 OK", r#"{"transactions":[]}"#).await;
    let client = ApiClient::new(url, None);

    let err = client.fetch_transactions().await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidPayload(_)), "{err:?}");
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(Url::parse(&format!("http://{addr}")).unwrap(), None);
    let err = client.fetch_transactions().await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)), "{err:?}");
}

//! Integration tests for the fetch layer against a local mock server.
//!
//! `ehttp` completes on its own worker thread, so each test blocks on the
//! fetch channel from a `spawn_blocking` task while the wiremock server
//! runs on the Tokio runtime.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use roster_business::{FetchError, Record};
use roster_ui::api::{Fetcher, create_fetch_channel};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBERS_BODY: &str = r#"[
    {"id":"1","name":"Alice","email":"alice@mail.com","role":"admin"},
    {"id":"2","name":"Bob","email":"bob@mail.com","role":"member"}
]"#;

async fn server_with(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// Runs one fetch to completion and returns what came over the channel.
fn fetch_from(url: String) -> Result<Vec<Record>, FetchError> {
    let (tx, rx) = create_fetch_channel();
    let fetcher = Fetcher::new(url, tx);
    fetcher.spawn(egui::Context::default());
    rx.recv_timeout(Duration::from_secs(10))
        .expect("fetch never completed")
}

async fn fetch_from_server(server: &MockServer) -> Result<Vec<Record>, FetchError> {
    let url = format!("{}/members.json", server.uri());
    tokio::task::spawn_blocking(move || fetch_from(url))
        .await
        .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_decodes_the_member_list() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_raw(MEMBERS_BODY, "application/json"),
    )
    .await;

    let records = fetch_from_server(&server).await.expect("fetch should succeed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field_text("name"), "Alice");
    assert_eq!(records[1].field_text("email"), "bob@mail.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_reported() {
    let server = server_with(ResponseTemplate::new(500)).await;

    let err = fetch_from_server(&server).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_a_decode_error() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_raw("this is not json", "application/json"),
    )
    .await;

    let err = fetch_from_server(&server).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn record_without_id_is_rejected() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_raw(r#"[{"name":"NoId"}]"#, "application/json"),
    )
    .await;

    let err = fetch_from_server(&server).await.unwrap_err();
    assert!(matches!(err, FetchError::MissingId(0)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port.
    let err = tokio::task::spawn_blocking(|| {
        fetch_from("http://127.0.0.1:9/members.json".to_string())
    })
    .await
    .expect("fetch task panicked")
    .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[test]
fn late_completion_after_shutdown_is_dropped() {
    // Dropping the receiver before the callback fires must not panic the
    // worker thread; the send just fails.
    let (tx, rx) = create_fetch_channel();
    let fetcher = Fetcher::new("http://127.0.0.1:9/members.json", tx);
    drop(rx);
    fetcher.spawn(egui::Context::default());
    std::thread::sleep(Duration::from_millis(200));
}

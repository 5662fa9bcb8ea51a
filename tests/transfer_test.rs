//! Transfer loop tests against a local mock server.

use infinity::transfer::{TransferConfig, TransferEngine};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine_for(server: &MockServer) -> TransferEngine {
    TransferEngine::new(TransferConfig {
        url: format!("{}/largefile", server.uri()),
        connect_timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
async fn transfer_reports_every_received_byte() {
    let server = MockServer::start().await;
    let body = vec![0xA5u8; 256 * 1024];
    Mock::given(method("GET"))
        .and(path("/largefile"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    let (tx, mut rx) = mpsc::channel(100);

    let run = tokio::spawn(async move { engine.run(CancellationToken::new(), tx).await });

    let mut total = 0u64;
    while let Some(update) = rx.recv().await {
        total += update.bytes;
    }

    run.await
        .unwrap()
        .expect("transfer should finish cleanly when the stream ends");
    assert_eq!(total, body.len() as u64);
}

#[tokio::test]
async fn cancellation_short_circuits_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/largefile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0u8; 1024 * 1024])
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let (tx, _rx) = mpsc::channel(100);

    let run = tokio::spawn(async move { engine.run(token, tx).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let err = run
        .await
        .unwrap()
        .expect_err("an aborted transfer must report cancellation");
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn http_error_status_fails_the_transfer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/largefile"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let engine = engine_for(&server);
    let (tx, _rx) = mpsc::channel(100);

    let err = engine
        .run(CancellationToken::new(), tx)
        .await
        .expect_err("a non-success status is an error");
    assert!(!err.is_cancelled());
    assert!(err.to_string().contains("404"));
}

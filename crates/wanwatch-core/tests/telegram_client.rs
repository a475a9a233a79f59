#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use std::time::Duration;

use wanwatch_core::notify::{dispatch, Notifier, TelegramClient};
use wanwatch_core::AppError;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "123:abc";
const CHAT: &str = "4242";

fn client(server: &MockServer) -> TelegramClient {
    TelegramClient::new(reqwest::Client::new(), &server.uri(), TOKEN, CHAT)
        .expect("valid client config")
}

#[tokio::test]
async fn test_send_message_posts_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(body_string_contains("chat_id=4242"))
        .and(body_string_contains("text=hello"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true, "result": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client(&server).send("hello").await.expect("send should succeed");
}

#[tokio::test]
async fn test_send_message_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let telegram = client(&server);
    let err = telegram.send_message("hello").await.expect_err("400 must fail");
    assert!(matches!(err, AppError::Telegram(ref msg) if msg.contains("chat not found")));
    assert!(!err.to_string().contains(TOKEN), "token leaked into error: {err}");

    assert!(!dispatch(&telegram, "hello").await);
}

#[tokio::test]
async fn test_get_updates_passes_cursor_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .and(query_param("offset", "5"))
        .and(query_param("timeout", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": [
                {"update_id": 5, "message": {"chat": {"id": 4242}, "text": "/status"}},
                {"update_id": 6, "message": {"chat": {"id": 1}, "text": "hi"}},
                {"broken": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let batch = client(&server)
        .get_updates(Some(5), Duration::from_secs(1))
        .await
        .expect("poll should succeed");

    assert_eq!(batch.max_update_id, Some(6));
    assert_eq!(batch.messages.len(), 2);
    assert_eq!(batch.skipped, 1);
    assert_eq!(batch.messages[0].text.as_deref(), Some("/status"));
}

#[tokio::test]
async fn test_get_updates_rejects_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_updates(None, Duration::from_secs(1))
        .await
        .expect_err("502 must fail");
    assert!(matches!(err, AppError::Telegram(ref msg) if msg.contains("502")));
}

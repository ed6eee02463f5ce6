//! Shared fixtures for handler tests. Every call builds an isolated store.

use crate::app::build_router;
use crate::config::Config;
use crate::models::{Exposure, Paste, Syntax, UserId};
use crate::state::AppState;
use crate::store::PasteStore;
use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        service_port: 3000,
        service_host: "127.0.0.1".to_string(),
        seed_file: None,
    }
}

pub fn sample_paste(id: u64) -> Paste {
    Paste {
        id,
        name: format!("Paste {}", id),
        syntax: Syntax::PlainText,
        exposure: Exposure::Private,
        expiration: 10,
        text: "hello!".to_string(),
        user_id: UserId(json!(1)),
    }
}

/// A `data` object that passes every create check.
pub fn valid_payload() -> Value {
    json!({
        "name": "Hello World in JavaScript",
        "syntax": "Javascript",
        "exposure": "public",
        "expiration": 24,
        "text": "console.log('Hello World!');",
        "user_id": 7
    })
}

pub fn test_app(pastes: Vec<Paste>) -> (Router, AppState) {
    let store = PasteStore::with_pastes(pastes).expect("valid test seed");
    let state = AppState::new(store, test_config());
    (build_router(state.clone()), state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string()).unwrap_or_default();
    send_raw(app, method, uri, "application/json", raw).await
}

/// Sends `body` verbatim; an empty response body decodes to `Value::Null`.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: String,
) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

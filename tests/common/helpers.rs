use address_service::core::app_state::AppState;
use address_service::core::configure::app::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
use address_service::core::http::server::build_app;
use address_service::infrastructure::error::AppError;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Configuration backed by a private in-memory SQLite database.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test.
pub fn test_config() -> AppConfig {
    AppConfig {
        profile: "test".to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        db: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 5,
        },
        log: LogConfig {
            level: "debug".to_string(),
        },
    }
}

/// Connected and migrated state
pub async fn setup_state() -> AppState {
    AppState::new(test_config())
        .await
        .expect("Failed to build test state")
}

pub async fn setup_app() -> (Router, AppState) {
    let state = setup_state().await;
    (build_app(state.clone()), state)
}

/// Send one request through the router and decode the body as JSON,
/// falling back to a JSON string for plain-text bodies.
pub async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub fn address_body(street: &str, city: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "street": street,
        "city": city,
        "state": "Test State",
        "country": "India",
        "pin_code": 110001,
        "latitude": latitude,
        "longitude": longitude,
    })
}

/// POST an address and return its assigned id
pub async fn create_address(app: &Router, body: Value) -> i64 {
    let (status, value) = send_request(app, Method::POST, "/v1/addresses", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {value}");
    value["data"]["id"].as_i64().expect("created address has an id")
}

pub fn ids_of(value: &Value) -> Vec<i64> {
    value["data"]
        .as_array()
        .expect("data should be a list")
        .iter()
        .map(|a| a["id"].as_i64().expect("address id"))
        .collect()
}

/// Helper to check if a result contains a specific error message
pub fn assert_error_contains(result: &AppError, expected: &str) -> bool {
    match result {
        AppError::BadRequestError(msg) => msg.contains(expected),
        AppError::InvalidPayloadError(msg) => msg.contains(expected),
        AppError::EntityNotFoundError { detail } => detail.contains(expected),
        other => other.to_string().contains(expected),
    }
}

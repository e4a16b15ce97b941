// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use timestamp_relay::application::ports::store::KeyValueStore;
use timestamp_relay::application::services::ApplicationServices;
use timestamp_relay::domain::timestamp::DisplayZone;
use timestamp_relay::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state(store: Arc<dyn KeyValueStore>, zone: DisplayZone) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(store, zone)),
    }
}

pub fn make_test_router(store: Arc<dyn KeyValueStore>) -> axum::Router {
    make_test_router_in_zone(store, DisplayZone::utc())
}

pub fn make_test_router_in_zone(store: Arc<dyn KeyValueStore>, zone: DisplayZone) -> axum::Router {
    build_router(build_test_state(store, zone))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Split a response into status and parsed JSON body, checking the content type.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> String {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}

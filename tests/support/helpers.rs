// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use newsroom_core::application::ports::time::Clock;
use newsroom_core::application::services::ApplicationServices;
use newsroom_core::config::SiteConfig;
use newsroom_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsroom_core::infrastructure::repositories::InMemoryArticleStore;
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};

pub fn test_site() -> SiteConfig {
    SiteConfig {
        base_url: "https://news.example.org".to_string(),
        title: "Newsroom".to_string(),
        description: "Latest news and stories".to_string(),
    }
}

/// State over a fresh in-memory store and a clock that never moves.
pub fn build_test_state() -> HttpState {
    let store = Arc::new(InMemoryArticleStore::new());
    let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock));

    HttpState {
        services,
        site: test_site(),
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

pub fn patch_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

pub async fn read_text(resp: axum::response::Response) -> String {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body_bytes.to_vec()).expect("utf-8 body")
}

/// Assert that a response carries the expected status and an `{"error": ...}`
/// JSON body with the expected message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
}

//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener. Each call to
//! [`build_test_app`] reopens the sheet repositories from the given
//! data directory, so state persists across apps the way it does across
//! real server restarts.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_store::repositories::{SheetOfferRepo, SheetPersonRepo, SheetProjectRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
    }
}

/// Build the full application router with all middleware layers, backed
/// by sheet files in the given directory.
pub fn build_test_app(data_dir: &Path) -> Router {
    let config = test_config(data_dir);

    let projects = SheetProjectRepo::open(data_dir).expect("open projects sheet");
    let personnel = SheetPersonRepo::open(data_dir).expect("open personnel sheet");
    let offers = SheetOfferRepo::open(data_dir).expect("open offers sheet");

    let state = AppState {
        config: Arc::new(config.clone()),
        projects: Arc::new(projects),
        personnel: Arc::new(personnel),
        offers: Arc::new(offers),
    };

    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

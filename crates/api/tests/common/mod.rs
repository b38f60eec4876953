#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cyberpark_api::config::ServerConfig;
use cyberpark_api::router::build_app_router;
use cyberpark_api::state::AppState;
use cyberpark_core::clock::ManualClock;
use cyberpark_core::controller::SlotController;
use cyberpark_core::layout::SlotLayout;
use cyberpark_core::store::MemorySlotStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Fixed start time for the manual clock (2023-11-14T22:13:20Z).
pub const START_MILLIS: i64 = 1_700_000_000_000;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Router plus handles on the store and clock behind it.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemorySlotStore>,
    pub clock: Arc<ManualClock>,
}

/// Build the full application router over a seeded in-memory store and a
/// manual clock, using the same middleware stack as production.
pub async fn build_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(MemorySlotStore::new());
    let clock = Arc::new(ManualClock::new(START_MILLIS));

    let controller = Arc::new(SlotController::new(store.clone(), clock.clone()));
    controller
        .seed_if_empty(&SlotLayout::default())
        .await
        .expect("seeding the in-memory store");

    let state = AppState {
        controller,
        config: Arc::new(config.clone()),
    };
    let router = build_app_router(state, &config).expect("valid test config");

    TestApp {
        router,
        store,
        clock,
    }
}

pub async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Find a slot by id in a `GET /slots` JSON array.
pub fn find_slot<'a>(slots: &'a serde_json::Value, id: &str) -> &'a serde_json::Value {
    slots
        .as_array()
        .expect("slot list should be an array")
        .iter()
        .find(|s| s["id"] == id)
        .unwrap_or_else(|| panic!("slot {id} missing from listing"))
}

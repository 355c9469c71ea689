// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::inventory_repo::InventoryRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<InventoryRepo>,
    pub(crate) ws_summary_connections: Arc<AtomicUsize>,
    pub(crate) config: AppConfig,
}

pub fn app(
    store: Arc<InventoryRepo>,
    ws_summary_connections: Arc<AtomicUsize>,
    config: AppConfig,
) -> Router {
    let body_limit = config.server.max_body_bytes;
    let state = AppState {
        store,
        ws_summary_connections,
        config,
    };
    Router::new()
        .route("/", get(|| async { "gpu-registry: send device dumps to POST /dump" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/dump", post(http::dump_handler)) // POST /dump
        .route("/devices", get(http::devices_handler)) // GET /devices
        .route("/devices/{host}", get(http::host_devices_handler)) // GET /devices/{host}
        .route("/summary", get(http::summary_handler)) // GET /summary
        .route("/summary/{host}", get(http::host_summary_handler)) // GET /summary/{host}
        .route("/ws/summary", get(ws::ws_summary)) // WS /ws/summary
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

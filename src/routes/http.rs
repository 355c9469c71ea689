// HTTP handlers: version, ingestion, raw inventory and summaries

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bytes::Bytes;

use super::AppState;
use crate::aggregator;
use crate::error::{ApiError, IngestError};
use crate::models::{Device, HostSummary, Inventory, SummaryMap};
use crate::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /dump — replaces the device list of every host in the body.
/// Body is parsed regardless of Content-Type; malformed bodies leave the store untouched.
pub(super) async fn dump_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, IngestError> {
    match state.store.ingest_json(&body) {
        Ok(hosts) => {
            tracing::debug!(operation = "dump", hosts, "inventory ingested");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            tracing::info!(operation = "dump", error = %e, bytes = body.len(), "rejected dump");
            Err(e)
        }
    }
}

/// GET /devices — full host -> devices mapping.
pub(super) async fn devices_handler(State(state): State<AppState>) -> Json<Inventory> {
    Json(state.store.read_all())
}

/// GET /devices/{host}
pub(super) async fn host_devices_handler(
    State(state): State<AppState>,
    Path(host): Path<String>,
) -> Result<Json<Vec<Device>>, ApiError> {
    state
        .store
        .read_host(&host)
        .map(Json)
        .ok_or(ApiError::HostNotFound(host))
}

/// GET /summary — per-host summary recomputed from a fresh snapshot.
pub(super) async fn summary_handler(State(state): State<AppState>) -> Json<SummaryMap> {
    Json(aggregator::summarize(&state.store.read_all()))
}

/// GET /summary/{host}
pub(super) async fn host_summary_handler(
    State(state): State<AppState>,
    Path(host): Path<String>,
) -> Result<Json<HostSummary>, ApiError> {
    match state.store.read_host(&host) {
        Some(devices) => Ok(Json(aggregator::summarize_host(&devices))),
        None => Err(ApiError::HostNotFound(host)),
    }
}

// WebSocket handler: periodic summary push

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::aggregator;
use crate::inventory_repo::InventoryRepo;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Decrements ws_summary connection count on drop (connect = +1, drop = -1).
struct WsSummaryGuard(Arc<AtomicUsize>);

impl Drop for WsSummaryGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

pub(super) async fn ws_summary(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let store = state.store.clone();
    let conn_count = state.ws_summary_connections.clone();
    let interval_ms = state.config.publishing.summary_frequency_ms;
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_summary(socket, store, conn_count, interval_ms).await {
            tracing::info!("Summary stream error: {}", e);
        }
    })
}

/// Sends with a deadline; false means the client is gone or too slow.
async fn send_or_stop(socket: &mut WebSocket, message: Message) -> bool {
    matches!(timeout(WS_SEND_TIMEOUT, socket.send(message)).await, Ok(Ok(())))
}

async fn stream_summary(
    mut socket: WebSocket,
    store: Arc<InventoryRepo>,
    conn_count: Arc<AtomicUsize>,
    interval_ms: u64,
) -> anyhow::Result<()> {
    conn_count.fetch_add(1, Ordering::Relaxed);
    let _guard = WsSummaryGuard(conn_count);
    tracing::info!("Client connected to Summary stream");

    let mut tick = tokio::time::interval(Duration::from_millis(interval_ms));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = tick.tick() => {
                let summaries = aggregator::summarize(&store.read_all());
                let json = serde_json::to_string(&summaries)?;
                if !send_or_stop(&mut socket, Message::Text(json.into())).await {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                if !send_or_stop(&mut socket, Message::Ping(Bytes::new())).await {
                    break;
                }
            }
        }
    }
    Ok(())
}

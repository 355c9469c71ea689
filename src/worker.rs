// Background stats logger.
// The registry has no collection loop of its own; the worker only reports what the store holds.

use crate::aggregator;
use crate::inventory_repo::InventoryRepo;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, interval};

/// Store, counters and shutdown for the worker.
pub struct WorkerDeps {
    pub store: Arc<InventoryRepo>,
    pub ws_summary_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct WorkerConfig {
    /// How often to log inventory stats (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        store,
        ws_summary_connections,
        mut shutdown_rx,
    } = deps;
    let stats_log_interval = Duration::from_secs(config.stats_log_interval_secs);

    tokio::spawn(async move {
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // First tick fires immediately; skip it so an empty store isn't logged at startup.
        stats_log_tick.tick().await;

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    log_stats(&store, &ws_summary_connections);
                }
            }
        }
    })
}

fn log_stats(store: &InventoryRepo, ws_summary_connections: &AtomicUsize) {
    let stats = store.stats();
    let fleet = aggregator::fleet_totals(&aggregator::summarize(&store.read_all()));
    tracing::info!(
        hosts = stats.hosts,
        devices = stats.devices,
        ingests_total = stats.ingests_total,
        fleet_used_mem = fleet.total_used_memory,
        fleet_free_mem = fleet.total_free_memory,
        ws_summary_clients = ws_summary_connections.load(Ordering::Relaxed),
        "app stats"
    );
}

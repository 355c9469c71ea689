// In-memory inventory store: host -> current device list.
// Whole-host replacement under a single readers-writer lock.

use crate::error::IngestError;
use crate::models::{Device, Inventory};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::instrument;

/// `POST /dump` body as reporters send it: a `null` body or a `null` host
/// list both mean "no devices".
type DumpPayload = Option<BTreeMap<String, Option<Vec<Device>>>>;

/// Point-in-time counters for the stats logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub hosts: usize,
    pub devices: usize,
    pub ingests_total: u64,
}

/// Authoritative device inventory per host.
///
/// Readers share the lock; an ingest holds it exclusively for the duration of
/// its inserts, so no reader ever sees a host's old and new lists mixed.
/// Reads hand out owned clones; nothing outside the repo holds a reference
/// into the map.
#[derive(Debug, Default)]
pub struct InventoryRepo {
    inventory: RwLock<Inventory>,
    ingests_total: AtomicU64,
}

impl InventoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single insert of a fully built list, so a poisoned lock
    // still guards a consistent map.
    fn read_guard(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inventory.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inventory.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the full device list of every host in `updates`.
    /// Hosts not named in `updates` are left as they are.
    #[instrument(skip(self, updates), fields(repo = "inventory", operation = "ingest", hosts = updates.len()))]
    pub fn ingest(&self, updates: Inventory) {
        if updates.is_empty() {
            tracing::debug!("empty ingest; nothing to replace");
            return;
        }
        let mut inventory = self.write_guard();
        for (host, devices) in updates {
            tracing::trace!(host = %host, devices = devices.len(), "replacing host");
            inventory.insert(host, devices);
        }
        drop(inventory);
        self.ingests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Parses a raw `{host: [device, ...]}` payload and ingests it.
    /// The payload is fully decoded before the lock is taken, so a rejected
    /// payload never touches the store. Returns the number of hosts replaced.
    /// A `null` body is a no-op and a `null` host list stores the host as empty.
    pub fn ingest_json(&self, body: &[u8]) -> Result<usize, IngestError> {
        let payload: DumpPayload = serde_json::from_slice(body)?;
        let updates: Inventory = payload
            .unwrap_or_default()
            .into_iter()
            .map(|(host, devices)| (host, devices.unwrap_or_default()))
            .collect();
        let hosts = updates.len();
        self.ingest(updates);
        Ok(hosts)
    }

    /// Snapshot of the full mapping. Empty if nothing was ever ingested.
    #[instrument(skip(self), fields(repo = "inventory", operation = "read_all"))]
    pub fn read_all(&self) -> Inventory {
        self.read_guard().clone()
    }

    /// Current device list for one host, `None` if the host never reported.
    pub fn read_host(&self, host: &str) -> Option<Vec<Device>> {
        self.read_guard().get(host).cloned()
    }

    /// Every host key ever ingested.
    pub fn hosts(&self) -> BTreeSet<String> {
        self.read_guard().keys().cloned().collect()
    }

    pub fn stats(&self) -> InventoryStats {
        let inventory = self.read_guard();
        InventoryStats {
            hosts: inventory.len(),
            devices: inventory.values().map(Vec::len).sum(),
            ingests_total: self.ingests_total.load(Ordering::Relaxed),
        }
    }
}

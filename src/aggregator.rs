// Per-host summaries: pure aggregation over an inventory snapshot.
// Nothing is cached; callers pass whatever InventoryRepo::read_all returned.

use crate::models::{Device, FleetTotals, HostSummary, Inventory, SummaryMap};

/// Summarizes one host's device list.
/// Free memory is `sum(total) - sum(used)` and may be negative; it is not clamped.
/// Sums that overflow `f64` are left infinite / NaN rather than saturated.
pub fn summarize_host(devices: &[Device]) -> HostSummary {
    let used: f64 = devices.iter().map(|d| d.used_memory).sum();
    let total: f64 = devices.iter().map(|d| d.total_memory).sum();
    let free = total - used;
    let count = devices.len();
    let average_free = if count > 0 { free / count as f64 } else { 0.0 };
    HostSummary {
        total_devices: count,
        total_used_memory: used,
        total_free_memory: free,
        average_free_memory_per_device: average_free,
    }
}

/// One summary per host key, including hosts with an empty device list.
pub fn summarize(inventory: &Inventory) -> SummaryMap {
    inventory
        .iter()
        .map(|(host, devices)| (host.clone(), summarize_host(devices)))
        .collect()
}

/// Sums host summaries into fleet-wide totals.
pub fn fleet_totals(summaries: &SummaryMap) -> FleetTotals {
    summaries
        .values()
        .fold(FleetTotals::default(), |mut acc, s| {
            acc.total_used_memory += s.total_used_memory;
            acc.total_free_memory += s.total_free_memory;
            acc
        })
}

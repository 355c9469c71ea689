// Aggregator tests: per-host sums, averages, empty hosts, negative free memory

mod common;

use common::{device, gpu_host_1_devices, host};
use gpu_registry::aggregator::{fleet_totals, summarize, summarize_host};
use gpu_registry::models::*;

#[test]
fn summarize_empty_inventory_is_empty() {
    assert!(summarize(&Inventory::new()).is_empty());
}

#[test]
fn summarize_gpu_host_1() {
    let out = summarize(&host("gpu-host-1", gpu_host_1_devices()));
    assert_eq!(out.len(), 1);
    let s = out["gpu-host-1"];
    assert_eq!(s.total_devices, 2);
    assert_eq!(s.total_used_memory, 3.0);
    assert_eq!(s.total_free_memory, 13.0);
    assert_eq!(s.average_free_memory_per_device, 6.5);
}

#[test]
fn summarize_empty_host_is_all_zero() {
    let out = summarize(&host("empty-host", vec![]));
    let s = out["empty-host"];
    assert_eq!(s.total_devices, 0);
    assert_eq!(s.total_used_memory, 0.0);
    assert_eq!(s.total_free_memory, 0.0);
    assert_eq!(s.average_free_memory_per_device, 0.0);
}

#[test]
fn summarize_one_entry_per_host() {
    let mut inv = host("a", vec![device(0, "x", 1.0, 2.0)]);
    inv.insert("b".into(), vec![]);
    inv.insert(
        "c".into(),
        vec![device(0, "y", 0.0, 4.0), device(1, "z", 4.0, 4.0), device(2, "w", 2.0, 4.0)],
    );
    let out = summarize(&inv);
    assert_eq!(out.keys().cloned().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(out["c"].total_devices, 3);
    assert_eq!(out["c"].total_used_memory, 6.0);
    assert_eq!(out["c"].total_free_memory, 6.0);
    assert_eq!(out["c"].average_free_memory_per_device, 2.0);
}

#[test]
fn summarize_propagates_negative_free_memory() {
    let s = summarize_host(&[device(0, "over", 10.0, 8.0), device(1, "ok", 1.0, 8.0)]);
    assert_eq!(s.total_used_memory, 11.0);
    assert_eq!(s.total_free_memory, 5.0);

    let s = summarize_host(&[device(0, "over", 10.0, 8.0)]);
    assert_eq!(s.total_free_memory, -2.0);
    assert_eq!(s.average_free_memory_per_device, -2.0);
}

#[test]
fn summarize_overflow_is_not_saturated() {
    let s = summarize_host(&[device(0, "a", 1e308, 1e308), device(1, "b", 1e308, 1e308)]);
    assert_eq!(s.total_devices, 2);
    assert_eq!(s.total_used_memory, f64::INFINITY);
    assert!(s.total_free_memory.is_nan());
    assert!(s.average_free_memory_per_device.is_nan());

    // JSON has no infinity: non-finite sums go out as null and decode back as NaN.
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(
        json,
        r#"{"total_gpus":2,"total_used_mem":null,"total_free_mem":null,"avg_free_mem_per_gpu":null}"#
    );
    let back: HostSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_devices, 2);
    assert!(back.total_used_memory.is_nan());
}

#[test]
fn summarize_does_not_mutate_input() {
    let inv = host("gpu-host-1", gpu_host_1_devices());
    let before = inv.clone();
    let _ = summarize(&inv);
    assert_eq!(inv, before);
}

#[test]
fn fleet_totals_sums_hosts() {
    let mut inv = host("gpu-host-1", gpu_host_1_devices());
    inv.insert("empty-host".into(), vec![]);
    inv.insert("h3".into(), vec![device(0, "q", 4.0, 6.0)]);
    let totals = fleet_totals(&summarize(&inv));
    assert_eq!(totals.total_used_memory, 7.0);
    assert_eq!(totals.total_free_memory, 15.0);
}

#[test]
fn fleet_totals_of_nothing_is_default() {
    assert_eq!(fleet_totals(&SummaryMap::new()), FleetTotals::default());
}

// Shared test helpers
#![allow(dead_code)]

use gpu_registry::models::*;

pub fn device(index: u64, uuid: &str, used: f64, total: f64) -> Device {
    Device::new(index, uuid, used, total)
}

/// Single-host inventory, handy for ingest calls.
pub fn host(name: &str, devices: Vec<Device>) -> Inventory {
    let mut inventory = Inventory::new();
    inventory.insert(name.to_string(), devices);
    inventory
}

/// Two 8 GB cards with 2 GB and 1 GB in use.
pub fn gpu_host_1_devices() -> Vec<Device> {
    vec![device(0, "u1", 2.0, 8.0), device(1, "u2", 1.0, 8.0)]
}

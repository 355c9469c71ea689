// Domain models: devices, inventories and derived summaries

mod device;
mod summary;

use std::collections::BTreeMap;

pub use device::Device;
pub use summary::{FleetTotals, HostSummary};

/// Host identifier to its full, ordered device list.
pub type Inventory = BTreeMap<String, Vec<Device>>;

/// Host identifier to its derived summary.
pub type SummaryMap = BTreeMap<String, HostSummary>;

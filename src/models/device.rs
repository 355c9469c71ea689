// Accelerator device as reported by a host

use serde::{Deserialize, Serialize};

/// One accelerator's state at last report.
///
/// Wire names follow the ingestion payload: `memory` is the used amount,
/// `total` the addressable amount. `total >= memory` is expected but not enforced.
/// Fields missing from a report decode as zero / empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub index: u64,
    #[serde(default)]
    pub uuid: String,
    #[serde(rename = "memory", default)]
    pub used_memory: f64,
    #[serde(rename = "total", default)]
    pub total_memory: f64,
}

impl Device {
    pub fn new(index: u64, uuid: impl Into<String>, used_memory: f64, total_memory: f64) -> Self {
        Self {
            index,
            uuid: uuid.into(),
            used_memory,
            total_memory,
        }
    }
}

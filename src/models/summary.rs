// Derived per-host and fleet-wide aggregates (never stored)

use serde::{Deserialize, Deserializer, Serialize};

/// Per-host summary computed from the host's current device list.
///
/// Sums that overflow `f64` (infinite or NaN) go out as JSON `null`; reading
/// a `null` back yields NaN so a `/summary` response always decodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostSummary {
    #[serde(rename = "total_gpus")]
    pub total_devices: usize,
    #[serde(rename = "total_used_mem", deserialize_with = "nan_if_null")]
    pub total_used_memory: f64,
    #[serde(rename = "total_free_mem", deserialize_with = "nan_if_null")]
    pub total_free_memory: f64,
    #[serde(rename = "avg_free_mem_per_gpu", deserialize_with = "nan_if_null")]
    pub average_free_memory_per_device: f64,
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Memory sums across every host summary; used for periodic stats logging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FleetTotals {
    pub total_used_memory: f64,
    pub total_free_memory: f64,
}

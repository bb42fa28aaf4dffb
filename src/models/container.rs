// Container identity and derived metrics models

use serde::{Deserialize, Serialize};

/// A running container as reported by the engine's list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    /// Full engine-assigned id.
    pub id: String,
    /// Primary name with the engine's leading `/` stripped; `None` when unnamed.
    pub name: Option<String>,
}

impl ContainerRef {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }
}

/// Point-in-time metrics for one container. JSON field names are the `/api/stats` contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub id: String,
    pub name: String,
    pub cpu_percent: f64,
    #[serde(rename = "memory_usage")]
    pub memory_usage_bytes: u64,
    #[serde(rename = "memory_limit")]
    pub memory_limit_bytes: u64,
    pub memory_percent: f64,
    #[serde(rename = "network_rx")]
    pub network_rx_bytes: u64,
    #[serde(rename = "network_tx")]
    pub network_tx_bytes: u64,
    #[serde(rename = "block_read")]
    pub block_read_bytes: u64,
    #[serde(rename = "block_write")]
    pub block_write_bytes: u64,
}

/// One poll's worth of metrics, in engine listing order.
pub type MetricsBatch = Vec<ContainerMetrics>;

// Turn a raw stats snapshot into point-in-time container metrics.

use crate::models::{BlockIoOp, ContainerMetrics, ContainerRef, RawStatsSnapshot};

/// Number of id characters shown to users (same as `docker ps`).
pub const DISPLAY_ID_LEN: usize = 12;

/// First 12 characters of an id, or the whole id when shorter.
pub fn display_id(id: &str) -> &str {
    match id.char_indices().nth(DISPLAY_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Engine-reported name, falling back to the display id for unnamed containers.
pub fn display_name(container: &ContainerRef) -> String {
    match container.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => display_id(&container.id).to_string(),
    }
}

/// CPU usage as a percentage of one host CPU, scaled by the online core count.
///
/// Zero whenever either delta is not positive (counter reset, first sample, clock skew).
pub fn cpu_percent(s: &RawStatsSnapshot) -> f64 {
    let cpu_delta = s.cpu_usage_total as i128 - s.previous_cpu_usage_total as i128;
    let system_delta = s.system_cpu_usage as i128 - s.previous_system_cpu_usage as i128;
    if cpu_delta > 0 && system_delta > 0 {
        (cpu_delta as f64 / system_delta as f64) * f64::from(s.online_cpu_count) * 100.0
    } else {
        0.0
    }
}

/// Memory usage as a percentage of the limit. A zero limit means unbounded: reported as 0.
pub fn memory_percent(usage: u64, limit: u64) -> f64 {
    if limit > 0 {
        usage as f64 / limit as f64 * 100.0
    } else {
        0.0
    }
}

/// Total (rx, tx) bytes across all interfaces.
pub fn network_totals(s: &RawStatsSnapshot) -> (u64, u64) {
    s.network_interfaces
        .iter()
        .fold((0u64, 0u64), |(rx, tx), iface| {
            (rx.saturating_add(iface.rx_bytes), tx.saturating_add(iface.tx_bytes))
        })
}

/// Total (read, write) bytes; `Other` ops count toward neither.
pub fn block_io_totals(s: &RawStatsSnapshot) -> (u64, u64) {
    s.block_io_ops
        .iter()
        .fold((0u64, 0u64), |(read, write), e| match e.op {
            BlockIoOp::Read => (read.saturating_add(e.bytes), write),
            BlockIoOp::Write => (read, write.saturating_add(e.bytes)),
            BlockIoOp::Other => (read, write),
        })
}

/// Derive the metrics for one container. Total over any snapshot.
pub fn derive_metrics(container: &ContainerRef, s: &RawStatsSnapshot) -> ContainerMetrics {
    let (network_rx_bytes, network_tx_bytes) = network_totals(s);
    let (block_read_bytes, block_write_bytes) = block_io_totals(s);
    ContainerMetrics {
        id: display_id(&container.id).to_string(),
        name: display_name(container),
        cpu_percent: cpu_percent(s),
        memory_usage_bytes: s.memory_usage,
        memory_limit_bytes: s.memory_limit,
        memory_percent: memory_percent(s.memory_usage, s.memory_limit),
        network_rx_bytes,
        network_tx_bytes,
        block_read_bytes,
        block_write_bytes,
    }
}

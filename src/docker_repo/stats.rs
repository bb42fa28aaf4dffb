// Convert a raw Docker stats API response into a RawStatsSnapshot.

use crate::error::SampleError;
use crate::models::{BlockIoEntry, BlockIoOp, InterfaceCounters, RawStatsSnapshot};
use bollard::secret::{ContainerCpuStats, ContainerStatsResponse};

/// Online CPU count, falling back to the per-CPU usage vector on engines that omit it.
fn online_cpus(cpu_stats: &ContainerCpuStats) -> u32 {
    match cpu_stats.online_cpus {
        Some(n) if n > 0 => n,
        _ => cpu_stats
            .cpu_usage
            .as_ref()
            .and_then(|u| u.percpu_usage.as_ref())
            .map_or(0, |p| u32::try_from(p.len()).unwrap_or(u32::MAX)),
    }
}

pub(crate) fn to_snapshot(s: &ContainerStatsResponse) -> Result<RawStatsSnapshot, SampleError> {
    let cpu_stats = s
        .cpu_stats
        .as_ref()
        .ok_or(SampleError::Decode("missing cpu_stats"))?;
    let cpu_usage = cpu_stats
        .cpu_usage
        .as_ref()
        .ok_or(SampleError::Decode("missing cpu_stats.cpu_usage"))?;

    // precpu_stats is empty on the very first read of a fresh container; treat as zeros.
    let precpu_stats = s.precpu_stats.as_ref();
    let previous_cpu_usage_total = precpu_stats
        .and_then(|p| p.cpu_usage.as_ref())
        .and_then(|u| u.total_usage)
        .unwrap_or(0);
    let previous_system_cpu_usage = precpu_stats
        .and_then(|p| p.system_cpu_usage)
        .unwrap_or(0);

    let memory_usage = s.memory_stats.as_ref().and_then(|m| m.usage).unwrap_or(0);
    let memory_limit = s.memory_stats.as_ref().and_then(|m| m.limit).unwrap_or(0);

    let mut networks: Vec<_> = s
        .networks
        .as_ref()
        .map(|n| n.iter().collect())
        .unwrap_or_default();
    networks.sort_by(|(a, _), (b, _)| a.cmp(b));
    let network_interfaces = networks
        .into_iter()
        .map(|(_, v)| InterfaceCounters {
            rx_bytes: v.rx_bytes.unwrap_or(0),
            tx_bytes: v.tx_bytes.unwrap_or(0),
        })
        .collect();

    let block_io_ops = s
        .blkio_stats
        .as_ref()
        .and_then(|b| b.io_service_bytes_recursive.as_ref())
        .map(|entries| {
            entries
                .iter()
                .map(|e| BlockIoEntry {
                    op: e
                        .op
                        .as_deref()
                        .map_or(BlockIoOp::Other, BlockIoOp::from_engine),
                    bytes: e.value.unwrap_or(0),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(RawStatsSnapshot {
        cpu_usage_total: cpu_usage.total_usage.unwrap_or(0),
        system_cpu_usage: cpu_stats.system_cpu_usage.unwrap_or(0),
        online_cpu_count: online_cpus(cpu_stats),
        previous_cpu_usage_total,
        previous_system_cpu_usage,
        memory_usage,
        memory_limit,
        network_interfaces,
        block_io_ops,
    })
}

// Domain models: engine-facing raw snapshots and derived per-container metrics

mod container;
mod raw;

pub use container::{ContainerMetrics, ContainerRef, MetricsBatch};
pub use raw::{BlockIoEntry, BlockIoOp, InterfaceCounters, RawStatsSnapshot};

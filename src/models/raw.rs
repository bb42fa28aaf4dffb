// Raw cumulative counters for one container, as read from the engine

/// Block I/O operation kind. Anything that is not a read or a write is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIoOp {
    Read,
    Write,
    Other,
}

impl BlockIoOp {
    /// Parse from the engine's op string (e.g. "Read", "write", "Total").
    pub fn from_engine(op: &str) -> Self {
        if op.eq_ignore_ascii_case("read") {
            BlockIoOp::Read
        } else if op.eq_ignore_ascii_case("write") {
            BlockIoOp::Write
        } else {
            BlockIoOp::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceCounters {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockIoEntry {
    pub op: BlockIoOp,
    pub bytes: u64,
}

/// A single stats read. Carries both the current and the previous CPU sample;
/// the engine picks the window between them, so every poll is self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawStatsSnapshot {
    /// Container CPU time, ns.
    pub cpu_usage_total: u64,
    /// Host CPU time, ns.
    pub system_cpu_usage: u64,
    pub online_cpu_count: u32,
    pub previous_cpu_usage_total: u64,
    pub previous_system_cpu_usage: u64,
    pub memory_usage: u64,
    pub memory_limit: u64,
    pub network_interfaces: Vec<InterfaceCounters>,
    pub block_io_ops: Vec<BlockIoEntry>,
}

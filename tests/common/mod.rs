// Shared test helpers: an in-memory StatsSource

#![allow(dead_code)]

use async_trait::async_trait;
use dockmon::collector::StatsCollector;
use dockmon::error::{CollectError, SampleError};
use dockmon::models::*;
use dockmon::source::StatsSource;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub enum Outcome {
    Ok(RawStatsSnapshot),
    Fail,
    Hang,
}

/// Scripted engine: a fixed listing and a per-id snapshot outcome.
pub struct MockSource {
    listing: Option<Vec<ContainerRef>>,
    outcomes: HashMap<String, Outcome>,
    pub list_calls: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            listing: Some(vec![]),
            outcomes: HashMap::new(),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose listing call always fails.
    pub fn unreachable() -> Self {
        Self {
            listing: None,
            ..Self::new()
        }
    }

    pub fn with(mut self, id: &str, name: Option<&str>, outcome: Outcome) -> Self {
        if let Some(listing) = self.listing.as_mut() {
            listing.push(ContainerRef::new(id, name.map(str::to_string)));
        }
        self.outcomes.insert(id.to_string(), outcome);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for MockSource {
    async fn list_running(&self) -> Result<Vec<ContainerRef>, CollectError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.listing
            .clone()
            .ok_or_else(|| CollectError::EngineUnreachable("connection refused".into()))
    }

    async fn fetch_snapshot(&self, id: &str) -> Result<RawStatsSnapshot, SampleError> {
        match self.outcomes.get(id) {
            Some(Outcome::Ok(s)) => Ok(s.clone()),
            Some(Outcome::Fail) | None => Err(SampleError::Fetch("No such container".into())),
            Some(Outcome::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(SampleError::EmptyStream)
            }
        }
    }
}

/// Snapshot with 50% of one CPU on a 1-CPU host and the given memory counters.
pub fn snapshot(memory_usage: u64, memory_limit: u64) -> RawStatsSnapshot {
    RawStatsSnapshot {
        cpu_usage_total: 150,
        previous_cpu_usage_total: 100,
        system_cpu_usage: 1100,
        previous_system_cpu_usage: 1000,
        online_cpu_count: 1,
        memory_usage,
        memory_limit,
        network_interfaces: vec![],
        block_io_ops: vec![],
    }
}

pub fn collector(source: Arc<MockSource>) -> StatsCollector {
    StatsCollector::new(source, Duration::from_millis(200))
}

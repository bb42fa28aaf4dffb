// One poll: list running containers, sample each concurrently, derive metrics.

use crate::derive::{derive_metrics, display_id};
use crate::error::{CollectError, SampleError};
use crate::models::{ContainerMetrics, ContainerRef, MetricsBatch};
use crate::source::StatsSource;
use futures_util::future::join_all;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, timeout};

/// A container that was listed but could not be sampled.
#[derive(Debug)]
pub struct SampleFailure {
    /// Display (12-char) id.
    pub container_id: String,
    pub error: SampleError,
}

/// Outcome of one collect, before failures are reduced to log lines.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub metrics: MetricsBatch,
    pub failures: Vec<SampleFailure>,
}

/// Stateless collector; every call is an independent poll of the engine.
#[derive(Clone)]
pub struct StatsCollector {
    source: Arc<dyn StatsSource>,
    fetch_timeout: Duration,
}

impl StatsCollector {
    pub fn new(source: Arc<dyn StatsSource>, fetch_timeout: Duration) -> Self {
        Self {
            source,
            fetch_timeout,
        }
    }

    /// Metrics for every container that could be sampled, in listing order.
    /// Per-container failures are logged and skipped; only a failed listing is an error.
    pub async fn collect(&self) -> Result<MetricsBatch, CollectError> {
        let report = self.collect_report().await?;
        for failure in &report.failures {
            tracing::warn!(
                container_id = %failure.container_id,
                error = %failure.error,
                "failed to get stats for container"
            );
        }
        Ok(report.metrics)
    }

    /// Like [`collect`](Self::collect) but hands back the per-container failures instead of logging them.
    pub async fn collect_report(&self) -> Result<CollectReport, CollectError> {
        let containers = self.source.list_running().await?;

        // join_all keeps input order, so the batch follows the listing order.
        let results = join_all(containers.iter().map(|c| self.sample(c))).await;

        let mut report = CollectReport {
            metrics: Vec::with_capacity(containers.len()),
            failures: Vec::new(),
        };
        for (container, result) in containers.iter().zip(results) {
            match result {
                Ok(metrics) => report.metrics.push(metrics),
                Err(error) => report.failures.push(SampleFailure {
                    container_id: display_id(&container.id).to_string(),
                    error,
                }),
            }
        }
        tracing::debug!(
            operation = "collect",
            listed = containers.len(),
            sampled = report.metrics.len(),
            failed = report.failures.len(),
            "collect finished"
        );
        Ok(report)
    }

    async fn sample(&self, container: &ContainerRef) -> Result<ContainerMetrics, SampleError> {
        let snapshot = timeout(self.fetch_timeout, self.source.fetch_snapshot(&container.id))
            .await
            .map_err(|_| SampleError::Timeout(self.fetch_timeout))??;
        Ok(derive_metrics(container, &snapshot))
    }
}

/// Coalesces collects that arrive within `window` of the last successful one.
///
/// The poll runs under the lock, so concurrent callers queue behind a single
/// engine poll and then share its batch. Failed polls are not cached.
pub struct CachedCollector {
    collector: StatsCollector,
    window: Duration,
    last: Mutex<Option<(Instant, MetricsBatch)>>,
}

impl CachedCollector {
    /// A zero `window` disables caching: every call polls the engine.
    pub fn new(collector: StatsCollector, window: Duration) -> Self {
        Self {
            collector,
            window,
            last: Mutex::new(None),
        }
    }

    pub async fn collect(&self) -> Result<MetricsBatch, CollectError> {
        if self.window.is_zero() {
            return self.collector.collect().await;
        }
        let mut last = self.last.lock().await;
        if let Some((at, batch)) = last.as_ref()
            && at.elapsed() < self.window
        {
            return Ok(batch.clone());
        }
        let batch = self.collector.collect().await?;
        *last = Some((Instant::now(), batch.clone()));
        Ok(batch)
    }
}

// Terminal refresh loop: collect and render on a fixed cadence until shutdown.
// One cycle at a time; a slow cycle delays the next tick instead of overlapping it.

use crate::collector::StatsCollector;
use crate::models::ContainerMetrics;
use std::future::Future;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Cycle counts for a finished loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Cycles that delivered a batch to the renderer.
    pub cycles: u64,
    /// Cycles skipped because the container listing failed.
    pub failed_cycles: u64,
}

/// Runs an immediate first cycle, then one per `every`, until `shutdown` resolves.
///
/// A failed collect is logged and the loop waits for the next tick.
pub async fn run_terminal<F, R>(
    collector: &StatsCollector,
    every: Duration,
    shutdown: F,
    mut render: R,
) -> LoopSummary
where
    F: Future<Output = ()>,
    R: FnMut(&[ContainerMetrics]),
{
    // First tick of a tokio interval completes immediately.
    let mut tick = interval(every);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let mut summary = LoopSummary::default();

    tracing::debug!(interval_ms = every.as_millis() as u64, "Terminal loop started");

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::debug!("Terminal loop shutting down");
                break;
            }
            _ = tick.tick() => {
                let collected = tokio::select! {
                    biased;
                    _ = &mut shutdown => {
                        tracing::debug!("Terminal loop interrupted mid-collect");
                        break;
                    }
                    r = collector.collect() => r,
                };
                match collected {
                    Ok(batch) => {
                        render(&batch);
                        summary.cycles += 1;
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            operation = "collect",
                            "Error getting container stats"
                        );
                        summary.failed_cycles += 1;
                    }
                }
            }
        }
    }
    summary
}

// Raw stats capability: list running containers, read one snapshot per container

use async_trait::async_trait;

use crate::error::{CollectError, SampleError};
use crate::models::{ContainerRef, RawStatsSnapshot};

/// Read-only access to a container engine. Shared between the terminal loop and
/// concurrent HTTP handlers, so implementations must be safe to call concurrently.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Running containers in engine listing order.
    async fn list_running(&self) -> Result<Vec<ContainerRef>, CollectError>;

    /// One stats read for the container with the given full id.
    async fn fetch_snapshot(&self, id: &str) -> Result<RawStatsSnapshot, SampleError>;
}

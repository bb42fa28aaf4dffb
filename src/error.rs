// Error taxonomy for engine access and collection

use std::time::Duration;

/// Engine client could not be constructed; the process cannot start.
#[derive(Debug, thiserror::Error)]
#[error("failed to create Docker client: {0}")]
pub struct StartupError(#[source] pub bollard::errors::Error);

/// Listing running containers failed (engine unreachable, socket missing, permission denied).
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to list containers: {0}")]
    EngineUnreachable(String),
}

/// Sampling one container failed. Never fatal to a collect.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("stats request failed: {0}")]
    Fetch(String),
    #[error("malformed stats response: {0}")]
    Decode(&'static str),
    #[error("no stats returned")]
    EmptyStream,
    #[error("stats request timed out after {0:?}")]
    Timeout(Duration),
}

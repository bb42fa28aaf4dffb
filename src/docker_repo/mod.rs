// Docker engine access via bollard

mod stats;

use crate::config::DockerConfig;
use crate::error::{CollectError, SampleError, StartupError};
use crate::models::{ContainerRef, RawStatsSnapshot};
use crate::source::StatsSource;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{ListContainersOptions, StatsOptions};
use futures_util::StreamExt;
use std::collections::HashMap;
use std::time::Duration;

/// Shared engine client. `Docker` is a cheap handle over a pooled connection,
/// so `&self` calls are safe from any number of tasks.
pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    /// Connect using local defaults (`DOCKER_HOST`, else the platform socket).
    pub fn connect(config: &DockerConfig) -> Result<Self, StartupError> {
        let docker = Docker::connect_with_local_defaults()
            .map_err(StartupError)?
            .with_timeout(Duration::from_secs(config.timeout_secs));
        Ok(Self { docker })
    }

    /// Release the engine connection.
    pub fn close(self) {
        drop(self.docker);
        tracing::info!("Docker client closed");
    }
}

#[async_trait]
impl StatsSource for DockerRepo {
    async fn list_running(&self) -> Result<Vec<ContainerRef>, CollectError> {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["running".to_string()]);

        let filter = ListContainersOptions {
            all: false,
            filters: Some(filters),
            ..Default::default()
        };

        let containers = self
            .docker
            .list_containers(Some(filter))
            .await
            .map_err(|e| CollectError::EngineUnreachable(e.to_string()))?;

        Ok(containers
            .into_iter()
            .filter_map(|c| {
                let id = c.id?;
                let name = c
                    .names
                    .as_ref()
                    .and_then(|n| n.first())
                    .map(|n| n.trim_start_matches('/').to_string());
                Some(ContainerRef { id, name })
            })
            .collect())
    }

    async fn fetch_snapshot(&self, id: &str) -> Result<RawStatsSnapshot, SampleError> {
        // one_shot=false makes the engine wait for a second sample so precpu_stats is populated.
        let options = StatsOptions {
            stream: false,
            one_shot: false,
        };
        let mut stream = self.docker.stats(id, Some(options));
        match stream.next().await {
            Some(Ok(response)) => stats::to_snapshot(&response),
            Some(Err(e)) => Err(SampleError::Fetch(e.to_string())),
            None => Err(SampleError::EmptyStream),
        }
    }
}

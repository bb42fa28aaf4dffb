use anyhow::Result;
use clap::Parser;
use dockmon::collector::{CachedCollector, StatsCollector};
use dockmon::config::AppConfig;
use dockmon::docker_repo::DockerRepo;
use dockmon::source::StatsSource;
use dockmon::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn run_api(collector: StatsCollector, app_config: &AppConfig) -> Result<()> {
    let cached = Arc::new(CachedCollector::new(
        collector,
        Duration::from_millis(app_config.monitoring.cache_window_ms),
    ));
    let app = routes::app(cached);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let port = app_config.server.port;
    tracing::info!("Starting API server on http://{}", addr);
    tracing::info!("Dashboard available at http://localhost:{}", port);
    tracing::info!("API endpoint: http://localhost:{}/api/stats", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Received shutdown signal");
        })
        .await?;
    Ok(())
}

async fn run_cli(collector: StatsCollector, app_config: &AppConfig) {
    let every = Duration::from_secs(app_config.monitoring.interval_secs);
    let summary = worker::run_terminal(
        &collector,
        every,
        shutdown_signal(),
        terminal::print_batch,
    )
    .await;
    println!("\nShutting down...");
    tracing::debug!(
        cycles = summary.cycles,
        failed_cycles = summary.failed_cycles,
        "Terminal loop finished"
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let app_config =
        AppConfig::load(cli.config.as_deref())?.with_overrides(cli.port, cli.interval)?;

    let docker_repo = Arc::new(DockerRepo::connect(&app_config.docker)?);
    let source: Arc<dyn StatsSource> = docker_repo.clone();
    let collector = StatsCollector::new(
        source,
        Duration::from_millis(app_config.monitoring.fetch_timeout_ms),
    );

    let result = if cli.api {
        run_api(collector, &app_config).await
    } else {
        run_cli(collector, &app_config).await;
        Ok(())
    };

    // Every collector clone is gone once the mode returns; release the engine client.
    match Arc::try_unwrap(docker_repo) {
        Ok(repo) => repo.close(),
        Err(_) => tracing::warn!("Docker client still in use at shutdown"),
    }

    result
}

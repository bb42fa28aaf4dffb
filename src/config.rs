use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub monitoring: MonitoringConfig,
    pub docker: DockerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Terminal refresh cadence.
    pub interval_secs: u64,
    /// Upper bound on one container's stats read; slower containers are skipped for the cycle.
    pub fetch_timeout_ms: u64,
    /// API requests arriving within this window of the last poll reuse its batch. 0 disables.
    pub cache_window_ms: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            interval_secs: 2,
            fetch_timeout_ms: 5000,
            cache_window_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Client-wide request timeout.
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

impl AppConfig {
    /// Load from `explicit` (`--config` / `CONFIG_FILE`), else `config.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load_from_file(default_path);
        }
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, then re-validate.
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        interval_secs: Option<u64>,
    ) -> anyhow::Result<Self> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(interval) = interval_secs {
            self.monitoring.interval_secs = interval;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.monitoring.interval_secs > 0,
            "monitoring.interval_secs must be > 0, got {}",
            self.monitoring.interval_secs
        );
        anyhow::ensure!(
            self.monitoring.fetch_timeout_ms > 0,
            "monitoring.fetch_timeout_ms must be > 0, got {}",
            self.monitoring.fetch_timeout_ms
        );
        anyhow::ensure!(
            self.docker.timeout_secs > 0,
            "docker.timeout_secs must be > 0, got {}",
            self.docker.timeout_secs
        );
        Ok(())
    }
}

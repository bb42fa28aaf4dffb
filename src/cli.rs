// Command-line flags

use clap::Parser;
use std::path::PathBuf;

/// Live Docker container stats in the terminal, or as a JSON API with a web dashboard.
#[derive(Parser, Debug)]
#[command(name = "dockmon", version, about, long_about = None)]
pub struct Cli {
    /// Start in API mode with the web dashboard instead of the terminal view.
    #[arg(long)]
    pub api: bool,

    /// Port for the API server (with --api). Overrides server.port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Terminal refresh interval in seconds. Overrides monitoring.interval_secs.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

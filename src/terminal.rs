// Terminal table renderer

use crate::models::ContainerMetrics;
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::io::Write as _;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Human-readable binary size, e.g. `512 B`, `1.50 KiB`, `2.00 GiB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.2} {}iB", bytes as f64 / div as f64, UNITS[exp])
}

/// Build one full frame (clear screen, header, table or empty notice).
pub fn render(batch: &[ContainerMetrics], now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(CLEAR_SCREEN);
    out.push_str("Docker Container Monitor\n");
    out.push_str("========================\n");
    let _ = writeln!(out, "Time: {}\n", now.format("%Y-%m-%d %H:%M:%S"));

    if batch.is_empty() {
        out.push_str("No running containers found.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<15} {:<30} {:>10} {:>25} {:>10} {:>25} {:>25}",
        "CONTAINER ID", "NAME", "CPU %", "MEMORY", "MEM %", "NET I/O", "BLOCK I/O"
    );
    out.push_str(&"-".repeat(146));
    out.push('\n');

    for m in batch {
        let memory = format!(
            "{} / {}",
            format_bytes(m.memory_usage_bytes),
            format_bytes(m.memory_limit_bytes)
        );
        let net = format!(
            "{} / {}",
            format_bytes(m.network_rx_bytes),
            format_bytes(m.network_tx_bytes)
        );
        let block = format!(
            "{} / {}",
            format_bytes(m.block_read_bytes),
            format_bytes(m.block_write_bytes)
        );
        let _ = writeln!(
            out,
            "{:<15} {:<30} {:>9.2}% {:>25} {:>9.2}% {:>25} {:>25}",
            m.id, m.name, m.cpu_percent, memory, m.memory_percent, net, block
        );
    }
    out
}

/// Render the batch to stdout.
pub fn print_batch(batch: &[ContainerMetrics]) {
    let frame = render(batch, Local::now());
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(frame.as_bytes())
        .and_then(|()| stdout.flush())
    {
        tracing::warn!(error = %e, operation = "print_batch", "failed to write to terminal");
    }
}

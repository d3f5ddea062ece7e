//! Air Quality Measurement Simulation
//!
//! Emits synthetic measurements as JSON lines for feeding the monitor.
//!
//! # Usage
//! ```bash
//! ./simulation --count 100 --seed 7 | ./pollution-monitor --stdin --report report.txt
//! ```

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pollution_monitor::{MeasurementSource, RandomSource};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "aqi-simulation")]
#[command(about = "Synthetic air quality measurements for pollution-monitor testing")]
#[command(version = "1.0")]
struct Args {
    /// Number of measurements to emit
    #[arg(short, long, default_value = "10")]
    count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between measurements in milliseconds
    #[arg(long, default_value = "0")]
    interval_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut source = RandomSource::new(args.seed);
    let interval = Duration::from_millis(args.interval_ms);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for i in 0..args.count {
        if i > 0 && !interval.is_zero() {
            std::thread::sleep(interval);
        }
        let measurement = source.next_measurement();
        let json = serde_json::to_string(&measurement).context("encoding measurement")?;
        writeln!(out, "{json}")?;
        out.flush()?;
    }

    info!(count = args.count, seed = ?args.seed, "Simulation complete");
    Ok(())
}

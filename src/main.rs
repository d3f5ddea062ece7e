//! Pollution Monitor - interactive station harness
//!
//! Drives a single [`Station`] from a text menu, or runs a one-shot batch
//! when `--stdin`, `--simulate` or `--report` is given.
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! cargo run --release
//!
//! # Batch: simulate 50 readings and export a report
//! ./pollution-monitor --simulate 50 --seed 7 --report report.txt
//!
//! # Batch: ingest JSON-line measurements from the simulator
//! ./simulation --count 100 | ./pollution-monitor --stdin --report report.txt
//! ```
//!
//! # Environment Variables
//!
//! - `POLLUTION_MONITOR_CONFIG`: Path to a station config TOML file
//! - `RUST_LOG`: Logging level (default: info)

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use pollution_monitor::report::format_number;
use pollution_monitor::{
    render_history, render_latest, simulate, Measurement, MeasurementSource, RandomSource,
    Station, StationConfig,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug, Default)]
#[command(name = "pollution-monitor")]
#[command(about = "Single-station air quality monitor")]
#[command(version)]
struct CliArgs {
    /// Station config TOML file (overrides the standard search order)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the station identifier
    #[arg(long)]
    id: Option<String>,

    /// Override the station location
    #[arg(long)]
    location: Option<String>,

    /// Random seed for simulated readings
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between simulated readings in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Read JSON-line measurements from stdin (batch mode)
    #[arg(long)]
    stdin: bool,

    /// Simulate N readings (batch mode)
    #[arg(long, value_name = "N")]
    simulate: Option<usize>,

    /// Write a report to FILE after ingestion (batch mode)
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl CliArgs {
    fn is_batch(&self) -> bool {
        self.stdin || self.simulate.is_some() || self.report.is_some()
    }

    /// Resolve the effective config: file or search order, then CLI overrides.
    fn resolve_config(&self) -> Result<StationConfig> {
        let mut config = match &self.config {
            Some(path) => StationConfig::load_from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => StationConfig::load(),
        };

        if let Some(id) = &self.id {
            config.station.id.clone_from(id);
        }
        if let Some(location) = &self.location {
            config.station.location.clone_from(location);
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if let Some(ms) = self.interval_ms {
            config.simulation.interval_ms = ms;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = args.resolve_config()?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut station = config.build_station();
    let mut source = RandomSource::new(config.simulation.seed);
    let interval = config.simulation.interval();

    info!(
        station = %station.id(),
        location = %station.location(),
        seeded = config.simulation.seed.is_some(),
        "Station ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_batch() {
        run_batch(&args, &mut station, &mut source, interval, &mut out)
    } else {
        let stdin = io::stdin();
        run_menu(&mut station, &mut source, interval, stdin.lock(), &mut out)
    }
}

// ============================================================================
// Batch Mode
// ============================================================================

fn run_batch<W: Write>(
    args: &CliArgs,
    station: &mut Station,
    source: &mut dyn MeasurementSource,
    interval: Duration,
    out: &mut W,
) -> Result<()> {
    if args.stdin {
        let stdin = io::stdin();
        let ingested = ingest_json_lines(station, stdin.lock())?;
        info!(count = ingested, "Ingested measurements from stdin");
    }

    if let Some(count) = args.simulate {
        simulate(station, source, count, interval);
    }

    writeln!(out, "Total readings: {}", station.reading_count())?;
    writeln!(out, "Average AQI: {}", format_number(station.average_aqi()))?;
    writeln!(out, "Worst pollution level recorded: {}", station.worst_reading())?;
    writeln!(
        out,
        "Critical readings (Unhealthy or worse): {}",
        station.critical_readings().len()
    )?;

    if let Some(path) = &args.report {
        let summary = station
            .generate_report(path)
            .context("writing station report")?;
        writeln!(out, "Report generated: {}", summary.path.display())?;
    }

    out.flush()?;
    Ok(())
}

/// Record one measurement per JSON line. Blank lines are skipped and
/// malformed lines are logged and skipped.
fn ingest_json_lines<R: BufRead>(station: &mut Station, input: R) -> Result<usize> {
    let mut ingested = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("reading measurement stream")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Measurement>(&line) {
            Ok(measurement) => {
                station.record(measurement);
                ingested += 1;
            }
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping malformed measurement");
            }
        }
    }
    Ok(ingested)
}

// ============================================================================
// Interactive Menu
// ============================================================================

const MENU: &str = "\n=== Pollution Monitoring System ===\n\
1. Simulate sensor readings\n\
2. Display latest reading\n\
3. Display all readings\n\
4. Generate report\n\
5. Show average AQI\n\
6. Show worst reading\n\
7. Show critical readings count\n\
8. Exit\n";

/// Run the menu until the user exits or input ends.
fn run_menu<R: BufRead, W: Write>(
    station: &mut Station,
    source: &mut dyn MeasurementSource,
    interval: Duration,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, out, "Enter your choice: ")? else {
            break;
        };

        match choice.parse::<u32>() {
            Ok(1) => {
                let Some(answer) = prompt(&mut input, out, "How many readings to simulate? ")?
                else {
                    break;
                };
                match answer.parse::<usize>() {
                    Ok(count) => {
                        let added = simulate(station, source, count, interval);
                        writeln!(out, "Added {added} simulated readings.")?;
                    }
                    Err(_) => writeln!(out, "Invalid count. Try again.")?,
                }
            }
            Ok(2) => write!(out, "{}", render_latest(station))?,
            Ok(3) => write!(out, "{}", render_history(station))?,
            Ok(4) => {
                let Some(filename) = prompt(&mut input, out, "Enter report filename: ")? else {
                    break;
                };
                match station.generate_report(&filename) {
                    Ok(summary) => {
                        writeln!(out, "Report generated: {}", summary.path.display())?;
                    }
                    Err(_) => writeln!(out, "Error creating report file.")?,
                }
            }
            Ok(5) => writeln!(out, "Average AQI: {}", format_number(station.average_aqi()))?,
            Ok(6) => writeln!(out, "Worst pollution level recorded: {}", station.worst_reading())?,
            Ok(7) => writeln!(
                out,
                "Critical readings (Unhealthy or worse): {}",
                station.critical_readings().len()
            )?,
            Ok(8) => {
                writeln!(out, "Exiting program...")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Print `question` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

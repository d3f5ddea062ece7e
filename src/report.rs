//! Report rendering
//!
//! Two surfaces share the same formatting rules:
//! - the plain-text report file (fixed-width table, see [`write_report`])
//! - the console views for the latest reading and the full history
//!
//! Numbers are printed with six significant digits and trailing zeros
//! trimmed (`75`, `18.5`, `1.23457e+06`). Timestamps use the classic
//! `Thu Mar  5 09:07:03 2026` layout in local time.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::station::Station;
use crate::types::Reading;

// ============================================================================
// Column layout
// ============================================================================

const TIMESTAMP_WIDTH: usize = 25;
const AQI_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 20;
const POLLUTANT_WIDTH: usize = 10;

const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Significant digits used for every numeric column.
const SIGNIFICANT_DIGITS: i32 = 6;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful report export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub readings: usize,
    pub bytes: usize,
}

// ============================================================================
// Report file
// ============================================================================

/// Write the full report table for `station` to `out`.
pub fn write_report<W: Write>(station: &Station, mut out: W) -> io::Result<()> {
    writeln!(out, "Pollution Sensor Report")?;
    writeln!(out, "Sensor ID: {}", station.id())?;
    writeln!(out, "Location: {}", station.location())?;
    writeln!(out, "Total Readings: {}", station.reading_count())?;
    writeln!(out)?;

    write_row(&mut out, ["Timestamp", "AQI", "Level", "CO2", "PM2.5", "PM10", "NO2"])?;

    for reading in station.all_readings() {
        let timestamp = format_timestamp(reading);
        let aqi = format_number(reading.aqi());
        let co2 = format_number(reading.co2());
        let pm2_5 = format_number(reading.pm2_5());
        let pm10 = format_number(reading.pm10());
        let no2 = format_number(reading.no2());
        write_row(
            &mut out,
            [
                timestamp.as_str(),
                aqi.as_str(),
                reading.level().label(),
                co2.as_str(),
                pm2_5.as_str(),
                pm10.as_str(),
                no2.as_str(),
            ],
        )?;
    }

    out.flush()
}

fn write_row<W: Write>(out: &mut W, cells: [&str; 7]) -> io::Result<()> {
    let [timestamp, aqi, level, co2, pm2_5, pm10, no2] = cells;
    writeln!(
        out,
        "{timestamp:<tw$}{aqi:<aw$}{level:<lw$}{co2:<pw$}{pm2_5:<pw$}{pm10:<pw$}{no2:<pw$}",
        tw = TIMESTAMP_WIDTH,
        aw = AQI_WIDTH,
        lw = LEVEL_WIDTH,
        pw = POLLUTANT_WIDTH,
    )
}

impl Station {
    /// Export the report table to `path`, creating or truncating the file.
    ///
    /// The table is rendered in memory first, so a failure to open or write
    /// the destination never leaves the station in a different state.
    pub fn generate_report(&self, path: impl AsRef<Path>) -> Result<ReportSummary, ReportError> {
        let path = path.as_ref();

        let mut buf = Vec::new();
        write_report(self, &mut buf).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Err(source) = std::fs::write(path, &buf) {
            error!(path = %path.display(), error = %source, "Error creating report file");
            return Err(ReportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        info!(
            path = %path.display(),
            station = %self.id(),
            readings = self.reading_count(),
            bytes = buf.len(),
            "Report generated"
        );

        Ok(ReportSummary {
            path: path.to_path_buf(),
            readings: self.reading_count(),
            bytes: buf.len(),
        })
    }
}

// ============================================================================
// Console views
// ============================================================================

/// Detail block for the most recent reading.
pub fn render_latest(station: &Station) -> String {
    render_with(|out| write_latest(station, out))
}

/// Compact listing of every reading.
pub fn render_history(station: &Station) -> String {
    render_with(|out| write_history(station, out))
}

/// Collect a view into a `String`; formatting into a `String` cannot fail.
fn render_with(write_view: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    if write_view(&mut out).is_err() {
        out.clear();
    }
    out
}

/// Write the latest-reading block, or a notice when nothing is recorded.
pub fn write_latest<W: fmt::Write>(station: &Station, out: &mut W) -> fmt::Result {
    let Some(latest) = station.latest_reading() else {
        return writeln!(out, "No readings available.");
    };

    writeln!(out, "\n=== Latest Pollution Reading ===")?;
    writeln!(out, "Sensor ID: {}", station.id())?;
    writeln!(out, "Location: {}", station.location())?;
    writeln!(out, "Timestamp: {}", format_timestamp(latest))?;
    writeln!(out, "AQI: {}", format_number(latest.aqi()))?;
    writeln!(out, "CO2: {} ppm", format_number(latest.co2()))?;
    writeln!(out, "PM2.5: {} μg/m³", format_number(latest.pm2_5()))?;
    writeln!(out, "PM10: {} μg/m³", format_number(latest.pm10()))?;
    writeln!(out, "NO2: {} ppb", format_number(latest.no2()))?;
    writeln!(out, "Level: {}", latest.level())?;
    writeln!(out, "==============================")
}

/// Write the header and one entry per reading.
pub fn write_history<W: fmt::Write>(station: &Station, out: &mut W) -> fmt::Result {
    writeln!(out, "\n=== All Pollution Readings ===")?;
    writeln!(out, "Sensor ID: {}", station.id())?;
    writeln!(out, "Location: {}", station.location())?;
    writeln!(out, "Total Readings: {}\n", station.reading_count())?;

    for reading in station.all_readings() {
        writeln!(out, "Timestamp: {}", format_timestamp(reading))?;
        writeln!(
            out,
            "AQI: {} | Level: {}",
            format_number(reading.aqi()),
            reading.level()
        )?;
        writeln!(out, "--------------------------------")?;
    }
    Ok(())
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Local time in the classic calendar layout, no trailing newline.
pub fn format_timestamp(reading: &Reading) -> String {
    reading.timestamp().format(TIMESTAMP_FORMAT).to_string()
}

/// Shortest general-format rendering with six significant digits.
///
/// Picks fixed or scientific notation from the rounded exponent, then trims
/// trailing zeros: `75.0 -> "75"`, `0.5 -> "0.5"`, `1234567.0 -> "1.23457e+06"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{value:.precision$e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

//! Sensor station: identity plus an append-only reading history
//!
//! The station converts raw measurements into classified [`Reading`]s and
//! answers aggregate queries over everything recorded so far. History is
//! only ever appended to; callers receive read-only views.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::classifier::SeverityThresholds;
use crate::types::{Measurement, Reading, Severity};

/// A single monitoring station.
#[derive(Debug, Clone)]
pub struct Station {
    id: String,
    location: String,
    thresholds: SeverityThresholds,
    history: Vec<Reading>,
}

impl Station {
    /// Create a station using the standard AQI bands.
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self::with_thresholds(id, location, SeverityThresholds::default())
    }

    /// Create a station that classifies with custom bands.
    pub fn with_thresholds(
        id: impl Into<String>,
        location: impl Into<String>,
        thresholds: SeverityThresholds,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            thresholds,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn thresholds(&self) -> &SeverityThresholds {
        &self.thresholds
    }

    pub fn reading_count(&self) -> usize {
        self.history.len()
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Record a measurement stamped with the current local time.
    pub fn add_reading(&mut self, aqi: f64, co2: f64, pm2_5: f64, pm10: f64, no2: f64) {
        self.record(Measurement::new(aqi, co2, pm2_5, pm10, no2));
    }

    /// Record a measurement stamped with the current local time.
    pub fn record(&mut self, measurement: Measurement) -> &Reading {
        self.record_at(measurement, Local::now())
    }

    /// Record a measurement with an explicit timestamp.
    ///
    /// The caller is responsible for chronological order; history keeps
    /// insertion order regardless of the timestamps supplied.
    pub fn record_at(&mut self, measurement: Measurement, timestamp: DateTime<Local>) -> &Reading {
        let reading = Reading::classified(timestamp, measurement, &self.thresholds);
        debug!(
            station = %self.id,
            aqi = reading.aqi(),
            level = %reading.level(),
            count = self.history.len() + 1,
            "Recorded reading"
        );
        self.history.push(reading);
        &self.history[self.history.len() - 1]
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Most recent reading, or `None` before anything has been recorded.
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.history.last()
    }

    /// Every reading in insertion order.
    pub fn all_readings(&self) -> &[Reading] {
        &self.history
    }

    /// Mean AQI across the history; `0.0` when empty.
    pub fn average_aqi(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.history.iter().map(Reading::aqi).sum();
        sum / self.history.len() as f64
    }

    /// Highest severity recorded; `Good` when empty.
    pub fn worst_reading(&self) -> Severity {
        self.history
            .iter()
            .map(Reading::level)
            .max()
            .unwrap_or(Severity::Good)
    }

    /// Readings at `Unhealthy` or worse, in chronological order.
    pub fn critical_readings(&self) -> Vec<&Reading> {
        self.history
            .iter()
            .filter(|r| r.level().is_critical())
            .collect()
    }
}

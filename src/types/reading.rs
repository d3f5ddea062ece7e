//! Measurement input and classified Reading records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::Severity;
use crate::classifier::SeverityThresholds;

// ============================================================================
// Measurement (raw input)
// ============================================================================

/// One raw sample as submitted by a caller or emitted by a simulator.
///
/// No range validation is applied; any real value is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Measurement {
    /// Air Quality Index, drives classification
    pub aqi: f64,
    /// Carbon dioxide (ppm)
    pub co2: f64,
    /// Fine particulate matter (µg/m³)
    pub pm2_5: f64,
    /// Coarse particulate matter (µg/m³)
    pub pm10: f64,
    /// Nitrogen dioxide (ppb)
    pub no2: f64,
}

impl Measurement {
    pub const fn new(aqi: f64, co2: f64, pm2_5: f64, pm10: f64, no2: f64) -> Self {
        Self { aqi, co2, pm2_5, pm10, no2 }
    }
}

// ============================================================================
// Reading (classified record)
// ============================================================================

/// A timestamped, classified measurement.
///
/// `level` is computed once from `aqi` when the reading is built and is never
/// recomputed. There are no setters; the only constructor goes through the
/// classifier, so a stored level always matches the thresholds in force when
/// the reading was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    timestamp: DateTime<Local>,
    aqi: f64,
    co2: f64,
    pm2_5: f64,
    pm10: f64,
    no2: f64,
    level: Severity,
}

impl Reading {
    /// Classify `measurement` with `thresholds` and freeze the result.
    pub fn classified(
        timestamp: DateTime<Local>,
        measurement: Measurement,
        thresholds: &SeverityThresholds,
    ) -> Self {
        Self {
            timestamp,
            aqi: measurement.aqi,
            co2: measurement.co2,
            pm2_5: measurement.pm2_5,
            pm10: measurement.pm10,
            no2: measurement.no2,
            level: thresholds.classify(measurement.aqi),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn aqi(&self) -> f64 {
        self.aqi
    }

    pub fn co2(&self) -> f64 {
        self.co2
    }

    pub fn pm2_5(&self) -> f64 {
        self.pm2_5
    }

    pub fn pm10(&self) -> f64 {
        self.pm10
    }

    pub fn no2(&self) -> f64 {
        self.no2
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// The raw values this reading was built from.
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.aqi, self.co2, self.pm2_5, self.pm10, self.no2)
    }
}

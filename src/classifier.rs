//! AQI classification
//!
//! Maps an Air Quality Index value onto a [`Severity`] using consecutive
//! half-open bands. Each band's upper bound is inclusive, so a value sitting
//! exactly on a boundary lands in the safer level.
//!
//! ```text
//! aqi <= 50          Good
//! 50  < aqi <= 100   Moderate
//! 100 < aqi <= 150   Unhealthy
//! 150 < aqi <= 200   Very Unhealthy
//! aqi > 200          Hazardous
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Default AQI band upper bounds (inclusive)
pub mod aqi_thresholds {
    /// Upper bound of `Good`
    pub const GOOD_MAX: f64 = 50.0;
    /// Upper bound of `Moderate`
    pub const MODERATE_MAX: f64 = 100.0;
    /// Upper bound of `Unhealthy`
    pub const UNHEALTHY_MAX: f64 = 150.0;
    /// Upper bound of `VeryUnhealthy`; anything above is `Hazardous`
    pub const VERY_UNHEALTHY_MAX: f64 = 200.0;
}

// ============================================================================
// Threshold set
// ============================================================================

/// Upper bounds for each severity band, operator-tunable via `[thresholds]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeverityThresholds {
    pub good_max: f64,
    pub moderate_max: f64,
    pub unhealthy_max: f64,
    pub very_unhealthy_max: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            good_max: aqi_thresholds::GOOD_MAX,
            moderate_max: aqi_thresholds::MODERATE_MAX,
            unhealthy_max: aqi_thresholds::UNHEALTHY_MAX,
            very_unhealthy_max: aqi_thresholds::VERY_UNHEALTHY_MAX,
        }
    }
}

impl SeverityThresholds {
    /// Classify an AQI value. Total over `f64`: negatives are `Good`, and NaN
    /// fails every comparison and falls through to `Hazardous`.
    pub fn classify(&self, aqi: f64) -> Severity {
        if aqi <= self.good_max {
            Severity::Good
        } else if aqi <= self.moderate_max {
            Severity::Moderate
        } else if aqi <= self.unhealthy_max {
            Severity::Unhealthy
        } else if aqi <= self.very_unhealthy_max {
            Severity::VeryUnhealthy
        } else {
            Severity::Hazardous
        }
    }

    /// Check that every bound is finite and the bands strictly ascend.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let bounds = [
            ("thresholds.good_max", self.good_max),
            ("thresholds.moderate_max", self.moderate_max),
            ("thresholds.unhealthy_max", self.unhealthy_max),
            ("thresholds.very_unhealthy_max", self.very_unhealthy_max),
        ];

        let mut errors = Vec::new();
        for (name, value) in bounds {
            if !value.is_finite() {
                errors.push(format!("{name} must be finite (got {value})"));
            }
        }
        for pair in bounds.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if lower.is_finite() && upper.is_finite() && upper <= lower {
                errors.push(format!(
                    "{upper_name} ({upper:.1}) must be greater than {lower_name} ({lower:.1})"
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Classify with the standard AQI bands.
pub fn classify(aqi: f64) -> Severity {
    SeverityThresholds::default().classify(aqi)
}

/// Display label for a severity level.
pub fn render(level: Severity) -> &'static str {
    level.label()
}

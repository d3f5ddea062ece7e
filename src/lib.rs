//! Pollution Monitor: single-station air quality monitoring
//!
//! Ingests discrete pollution measurements, classifies each by AQI severity
//! and answers aggregate queries over the in-memory history.
//!
//! ## Architecture
//!
//! - **Classifier**: pure AQI to [`Severity`] mapping
//! - **Station**: identity plus an append-only log of classified readings
//! - **Report**: fixed-width report export and console views
//! - **Simulation**: injectable measurement sources for harnesses and tests

pub mod config;
pub mod types;
pub mod classifier;
pub mod station;
pub mod report;
pub mod simulation;

// Re-export configuration
pub use config::{ConfigError, StationConfig};

// Re-export commonly used types
pub use types::{Measurement, Reading, Severity};

pub use classifier::{classify, render, SeverityThresholds};
pub use station::Station;
pub use report::{render_history, render_latest, write_report, ReportError, ReportSummary};
pub use simulation::{simulate, MeasurementSource, RandomSource, ScriptedSource};

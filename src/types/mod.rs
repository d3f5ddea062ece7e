//! Shared data structures for single-station air quality monitoring
//!
//! This module defines the core value types of the monitor:
//! - `Severity`: ordered pollution-risk category derived from AQI
//! - `Measurement`: the five raw values submitted per sample
//! - `Reading`: one immutable, timestamped, classified record

mod severity;
mod reading;

pub use severity::*;
pub use reading::*;

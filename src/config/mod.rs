//! Station Configuration Module
//!
//! Station identity, severity thresholds and simulation settings, loaded
//! from TOML.
//!
//! ## Loading Order
//!
//! 1. `POLLUTION_MONITOR_CONFIG` environment variable (path to TOML file)
//! 2. `station_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! Configuration is read once by the binary and handed to the components
//! that need it; nothing in the library reads it from global state.

mod station_config;
pub mod defaults;
pub mod validation;

pub use station_config::*;

//! Station Configuration - identity, thresholds and simulation tuning
//!
//! Every section implements `Default`, so an empty or partial file behaves
//! like the built-in settings for whatever it leaves out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::classifier::SeverityThresholds;
use crate::station::Station;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a monitoring station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Station identification
    #[serde(default)]
    pub station: StationInfo,

    /// AQI band upper bounds
    #[serde(default)]
    pub thresholds: SeverityThresholds,

    /// Simulated input settings
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl StationConfig {
    /// Load configuration using the standard search order:
    /// 1. `$POLLUTION_MONITOR_CONFIG`
    /// 2. `./station_config.toml`
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), station = %config.station.id, "Loaded station config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(station = %config.station.id, "Loaded station config from ./{}", defaults::LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No station config found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&contents, path)
    }

    /// Parse a TOML document that did not come from a file.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!(origin = %origin.display(), "{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check the config for values the station cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.station.id.trim().is_empty() {
            errors.push("station.id must not be empty".to_string());
        }

        if let Err(threshold_errors) = self.thresholds.validate() {
            errors.extend(threshold_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build an empty station from this config.
    pub fn build_station(&self) -> Station {
        Station::with_thresholds(
            self.station.id.clone(),
            self.station.location.clone(),
            self.thresholds,
        )
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("{}", validation_message(.0))]
    Validation(Vec<String>),
}

fn validation_message(errors: &[String]) -> String {
    let mut message = String::from("Config validation failed:");
    for e in errors {
        message.push_str("\n  - ");
        message.push_str(e);
    }
    message
}

// ============================================================================
// Station Info
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationInfo {
    pub id: String,
    pub location: String,
}

impl Default for StationInfo {
    fn default() -> Self {
        Self {
            id: defaults::STATION_ID.to_string(),
            location: defaults::STATION_LOCATION.to_string(),
        }
    }
}

// ============================================================================
// Simulation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    /// Pause between simulated readings
    pub interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            interval_ms: defaults::SIMULATION_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.station.id, "PS-1000");
        assert_eq!(config.station.location, "Downtown City Center");
        assert_eq!(config.simulation.interval(), Duration::from_millis(100));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = StationConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, StationConfig::default());
    }

    #[test]
    fn empty_id_rejected() {
        let result = StationConfig::from_toml("[station]\nid = \"  \"\n");
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("station.id")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validation_message_lists_every_problem() {
        let err = ConfigError::Validation(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(
            err.to_string(),
            "Config validation failed:\n  - first\n  - second"
        );
    }

    #[test]
    fn toml_round_trip() {
        let mut config = StationConfig::default();
        config.station.id = "PS-42".to_string();
        config.simulation.seed = Some(9);
        let text = config.to_toml().expect("serialize");
        let back = StationConfig::from_toml(&text).expect("parse back");
        assert_eq!(back, config);
    }
}

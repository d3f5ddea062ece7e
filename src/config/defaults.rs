//! Built-in default values.

// ============================================================================
// Station
// ============================================================================

/// Station identifier used when none is configured.
pub const STATION_ID: &str = "PS-1000";

/// Station location used when none is configured.
pub const STATION_LOCATION: &str = "Downtown City Center";

// ============================================================================
// Configuration discovery
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "POLLUTION_MONITOR_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "station_config.toml";

// ============================================================================
// Simulation
// ============================================================================

/// Pause between simulated readings (ms).
///
/// Keeps consecutive timestamps apart when the harness simulates a batch.
pub const SIMULATION_INTERVAL_MS: u64 = 100;

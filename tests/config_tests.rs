//! Config Tests
//!
//! Loads station configs from disk and checks that thresholds and identity
//! flow through to the station they build.

use pollution_monitor::config::{defaults, ConfigError};
use pollution_monitor::{Severity, StationConfig};
use std::error::Error as _;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("station_config.toml");
    std::fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn file_config_builds_custom_station() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_config(
        &tmp,
        r#"
[station]
id = "PS-2040"
location = "Harbour Road"

[thresholds]
good_max = 25.0
moderate_max = 50.0
unhealthy_max = 75.0
very_unhealthy_max = 100.0

[simulation]
seed = 99
interval_ms = 0
"#,
    );

    let config = StationConfig::load_from_file(&path).expect("valid config");
    assert_eq!(config.simulation.seed, Some(99));
    assert!(config.simulation.interval().is_zero());

    let mut station = config.build_station();
    assert_eq!(station.id(), "PS-2040");
    assert_eq!(station.location(), "Harbour Road");

    station.add_reading(60.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(station.worst_reading(), Severity::Unhealthy);
}

#[test]
fn partial_config_keeps_defaults() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_config(&tmp, "[station]\nlocation = \"Airport\"\n");

    let config = StationConfig::load_from_file(&path).expect("valid config");
    assert_eq!(config.station.id, "PS-1000");
    assert_eq!(config.station.location, "Airport");
    assert_eq!(config.thresholds.good_max, 50.0);
    assert_eq!(config.simulation.interval_ms, 100);
}

#[test]
fn unordered_thresholds_rejected() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_config(&tmp, "[thresholds]\nunhealthy_max = 90.0\n");

    match StationConfig::load_from_file(&path) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 1, "got: {errors:?}");
            assert!(errors[0].contains("unhealthy_max"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_parse_error() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_config(&tmp, "[station\nid = ");
    assert!(matches!(
        StationConfig::load_from_file(&path),
        Err(ConfigError::Parse(_, _))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().expect("tempdir");
    let err = StationConfig::load_from_file(&tmp.path().join("absent.toml"))
        .expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_, _)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn io_error_keeps_underlying_source() {
    let tmp = TempDir::new().expect("tempdir");
    let err = StationConfig::load_from_file(&tmp.path().join("absent.toml"))
        .expect_err("missing file");
    let source = err.source().expect("io error should be chained");
    let io = source
        .downcast_ref::<std::io::Error>()
        .expect("source should be the io::Error");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn parse_error_keeps_underlying_source() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_config(&tmp, "[station\nid = ");
    let err = StationConfig::load_from_file(&path).expect_err("malformed toml");
    let source = err.source().expect("parse error should be chained");
    assert!(source.downcast_ref::<toml::de::Error>().is_some());
}

// ============================================================================
// Search order
// ============================================================================

/// Env var and working directory are process-wide, so the whole search
/// order is checked in one test.
#[test]
fn load_follows_search_order() {
    let original_dir = std::env::current_dir().expect("cwd");
    let work = TempDir::new().expect("tempdir");
    std::env::set_current_dir(work.path()).expect("enter tempdir");

    // 3. Nothing configured: built-in defaults
    std::env::remove_var(defaults::CONFIG_ENV_VAR);
    assert_eq!(StationConfig::load(), StationConfig::default());

    // 2. Local station_config.toml
    std::fs::write(
        work.path().join(defaults::LOCAL_CONFIG_FILE),
        "[station]\nid = \"PS-LOCAL\"\n",
    )
    .expect("write local config");
    assert_eq!(StationConfig::load().station.id, "PS-LOCAL");

    // 1. Env var wins over the local file
    let explicit = TempDir::new().expect("tempdir");
    let env_path = write_config(&explicit, "[station]\nid = \"PS-ENV\"\n");
    std::env::set_var(defaults::CONFIG_ENV_VAR, &env_path);
    assert_eq!(StationConfig::load().station.id, "PS-ENV");

    // Env var pointing nowhere falls back to the local file
    std::env::set_var(defaults::CONFIG_ENV_VAR, explicit.path().join("missing.toml"));
    assert_eq!(StationConfig::load().station.id, "PS-LOCAL");

    // Invalid env file also falls back
    std::fs::write(&env_path, "[thresholds]\ngood_max = 500.0\n").expect("rewrite");
    std::env::set_var(defaults::CONFIG_ENV_VAR, &env_path);
    assert_eq!(StationConfig::load().station.id, "PS-LOCAL");

    // Invalid local file falls back to defaults
    std::env::remove_var(defaults::CONFIG_ENV_VAR);
    std::fs::write(work.path().join(defaults::LOCAL_CONFIG_FILE), "[station\n")
        .expect("rewrite local config");
    assert_eq!(StationConfig::load(), StationConfig::default());

    std::env::set_current_dir(original_dir).expect("restore cwd");
}

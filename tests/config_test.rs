//! Integration tests for configuration loading.

use digitizer::config::Config;
use digitizer::error::ConfigError;
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");
    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn valid_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "grid": { "cols": 8, "rows": 6, "cell_spacing": 25.0 },
            "circle": { "is_bounded": false, "start_radius_factor": 0.5 }
        }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.grid.cols, 8);
    assert_eq!(config.grid.rows, 6);
    assert_eq!(config.grid.cell_spacing, 25.0);
    assert!(!config.circle.is_bounded);
    assert_eq!(config.start_radius(), 12.5);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn invalid_values_fail_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "grid": { "cols": 0 } }"#).unwrap();

    let err = Config::load(&path).unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "grid.cols"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn zero_spacing_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "grid": { "cell_spacing": 0.0 } }"#).unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn saved_config_round_trips_through_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.grid.cols = 3;
    config.grid.color_on = [255, 0, 0];
    config.circle.line_thickness = 2;
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
}

//! Unit tests for config loading.

use selector::config::SelectorConfigFile;
use selector::{FlowDirection, SelectorConfig, SelectorError, SelectorMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_canvas_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("selector.json");
    fs::write(&path, r#"{"mode": "canvas", "width": 1024, "height": 500}"#).unwrap();

    let config = SelectorConfig::load(&path).unwrap();
    assert_eq!(
        config.mode,
        SelectorMode::Canvas {
            width: 1024.0,
            height: 500.0
        }
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SelectorConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SelectorError::Io(_)));
}

#[test]
fn test_canvas_without_width() {
    let err = SelectorConfig::from_json(r#"{"mode": "canvas"}"#).unwrap_err();
    assert!(matches!(err, SelectorError::ConfigurationMissing("canvas width")));
    assert!(!err.is_user_visible());
}

#[test]
fn test_file_shape_round_trip() {
    for config in [
        SelectorConfig::list(FlowDirection::Row),
        SelectorConfig::list(FlowDirection::Column),
        SelectorConfig::canvas(640.0, 480.0),
    ] {
        let file = SelectorConfigFile::from(config);
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(SelectorConfig::from_json(&json).unwrap(), config);
    }
}

#[test]
fn test_direction_serializes_lowercase() {
    let file = SelectorConfigFile::from(SelectorConfig::list(FlowDirection::Row));
    let value = serde_json::to_value(&file).unwrap();
    assert_eq!(value["mode"], "list");
    assert_eq!(value["direction"], "row");
}

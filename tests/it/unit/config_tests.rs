//! Unit tests for config loading.

use std::fs;
use tempfile::tempdir;
use timeline_markers::{MarkerConfig, MarkerError, MarkerPosition, TextPosition};

#[test]
fn test_default_config_snapshot() {
    insta::assert_json_snapshot!(MarkerConfig::default(), @r###"
    {
      "default_color": "#D8D8D8",
      "default_position": "bottom",
      "default_text_position": "right",
      "drag_throttle_ms": 50,
      "reject_inverted_limits": true
    }
    "###);
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("markers.json");
    fs::write(
        &path,
        r##"{"default_color": "#00ff00", "default_position": "top", "default_text_position": "left"}"##,
    )
    .unwrap();

    let config = MarkerConfig::load(&path).unwrap();
    assert_eq!(config.default_color, "#00ff00");
    assert_eq!(config.default_position, MarkerPosition::Top);
    assert_eq!(config.default_text_position, TextPosition::Left);
    assert_eq!(config.drag_throttle_ms, 50);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = MarkerConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MarkerError::Io(_)));
}

#[test]
fn test_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"drag_throttle_ms\": \"fast\"}").unwrap();

    let err = MarkerConfig::load(&path).unwrap_err();
    assert!(matches!(err, MarkerError::ConfigParse(_)));
}

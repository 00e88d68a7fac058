//! Integration tests for Settings loading with layered precedence.
//!
//! These tests pass explicit file locations (temp directories only), so no
//! real global config takes part.

use std::fs;

use tempfile::TempDir;

use valkit::config::{existing_local_config, local_config_path, Settings};

#[test]
fn given_no_config_files_when_load_then_defaults() {
    let settings = Settings::load_from(None, None).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert!(settings.pretty);
    assert_eq!(settings.label_key, "name");
}

#[test]
fn given_local_config_when_load_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = local_config_path(dir.path());
    fs::write(&path, "label_key = \"title\"\n").unwrap();

    // Act
    let settings = Settings::load_from(None, Some(&path)).expect("load settings");

    // Assert: only label_key changes
    assert_eq!(settings.label_key, "title");
    assert!(settings.pretty);
    assert!(!settings.null_as_undefined);
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins() {
    let global_dir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let global = global_dir.path().join("valkit.toml");
    let local = local_config_path(local_dir.path());
    fs::write(&global, "pretty = false\nlabel_key = \"global\"\n").unwrap();
    fs::write(&local, "label_key = \"local\"\n").unwrap();

    let settings = Settings::load_from(Some(&global), Some(&local)).expect("load settings");

    assert_eq!(settings.label_key, "local");
    assert!(!settings.pretty, "global value kept when local is silent");
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = local_config_path(dir.path());
    fs::write(&path, "pretty = maybe\n").unwrap();

    let err = Settings::load_from(None, Some(&path)).unwrap_err();

    assert!(err.to_string().contains("config error"));
    assert!(err.to_string().contains(".valkit.toml"));
}

#[test]
fn given_directory_without_local_file_when_load_then_ignored() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let local = existing_local_config(dir.path());
    let settings = Settings::load_from(None, local.as_deref()).expect("load settings");

    // Assert
    assert!(local.is_none());
    assert_eq!(settings.label_key, Settings::default().label_key);
}

#[test]
fn given_directory_with_local_file_when_resolving_then_found() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "pretty = false\n").unwrap();

    let local = existing_local_config(dir.path());

    assert_eq!(local, Some(local_config_path(dir.path())));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips() {
    let settings = Settings {
        label_key: "id".into(),
        ..Settings::default()
    };

    let text = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();

    assert_eq!(parsed, settings);
}

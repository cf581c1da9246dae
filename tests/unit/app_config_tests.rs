/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use ass2vtt::app_config::{Config, LogLevel};
use crate::common;

/// Test the default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.input_extensions, vec!["ass".to_string(), "ssa".to_string()]);
    assert_eq!(config.output.extension, "vtt");
    assert!(config.output.include_notes);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that a partial config file falls back to defaults
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "output": { "include_notes": false }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.input_extensions, vec!["ass".to_string(), "ssa".to_string()]);
    assert_eq!(config.output.extension, "vtt");
    assert!(!config.output.include_notes);
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test that a saved config loads back the same
#[test]
fn test_save_thenLoad_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.input_extensions = vec!["ass".to_string()];
    config.output.extension = "webvtt".to_string();
    config.log_level = LogLevel::Trace;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.input_extensions, config.input_extensions);
    assert_eq!(loaded.output.extension, "webvtt");
    assert_eq!(loaded.log_level, LogLevel::Trace);

    Ok(())
}

/// Test that malformed JSON is rejected
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}

/// Test validation of the extension lists
#[test]
fn test_validate_withBadExtensions_shouldFail() {
    let mut config = Config::default();
    config.input_extensions.clear();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.output.extension = ".".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.output.extension = "ASS".to_string();
    assert!(config.validate().is_err());
}

/// Test the mapping to log level filters
#[test]
fn test_to_level_filter_shouldMatchLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

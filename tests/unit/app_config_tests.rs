/*!
 * Tests for configuration defaults, validation, and persistence
 */

use asstran::app_config::{Config, LogLevel};
use asstran::errors::ConfigError;
use crate::common;

fn valid_config() -> Config {
    Config {
        api_key: "sk-test".to_string(),
        ..Config::default()
    }
}

/// Test the configuration defaults
#[test]
fn test_config_default_shouldMatchReferenceValues() {
    let config = Config::default();

    assert!(config.api_key.is_empty());
    assert_eq!(config.endpoint, "https://api.openai.com");
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert_eq!(config.batch_size, 10);
    assert!(config.rate_limit_enabled);
    assert_eq!(config.rate_limit_delay_ms, 5000);
    assert_eq!(config.retry_count, 5);
    assert!(!config.prompt.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a missing API key is rejected before any network activity
#[test]
fn test_validate_withMissingApiKey_shouldFail() {
    let config = Config::default();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingApiKey)
    ));
}

/// Test that a zero batch size is rejected
#[test]
fn test_validate_withZeroBatchSize_shouldFail() {
    let config = Config {
        batch_size: 0,
        ..valid_config()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBatchSize)
    ));
}

/// Test that a malformed endpoint is rejected
#[test]
fn test_validate_withMalformedEndpoint_shouldFail() {
    let config = Config {
        endpoint: "not a url".to_string(),
        ..valid_config()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidEndpoint(_))
    ));
}

/// Test that a complete configuration passes validation
#[test]
fn test_validate_withCompleteConfig_shouldSucceed() {
    assert!(valid_config().validate().is_ok());
}

/// Test that partial JSON files fill in the defaults
#[test]
fn test_from_file_withPartialJson_shouldApplyDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "api_key": "sk-test", "batch_size": 4 }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.batch_size, 4);
    assert_eq!(config.retry_count, 5);
    assert!(config.rate_limit_enabled);
    assert_eq!(config.endpoint, "https://api.openai.com");
}

/// Test save and reload round trip
#[test]
fn test_save_and_from_file_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = valid_config();
    config.batch_size = 7;
    config.rate_limit_enabled = false;
    config.save_to_file(&path).unwrap();

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.api_key, "sk-test");
    assert_eq!(reloaded.batch_size, 7);
    assert!(!reloaded.rate_limit_enabled);
}

/// Test that an unreadable file surfaces as an error
#[test]
fn test_from_file_withMissingFile_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("nope.json");

    assert!(Config::from_file(&path).is_err());
}

use std::env;

use serial_test::serial;

use autholas::config::{AutholasConfig, DEFAULT_API_URL};

const VARS: [&str; 6] = [
    "AUTHOLAS_API_URL",
    "AUTHOLAS_API_KEY",
    "AUTHOLAS_TIMEOUT_SECS",
    "AUTHOLAS_DEVICE_NAME",
    "AUTHOLAS_LOGGING_ENABLED",
    "AUTHOLAS_LOG_LEVEL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

// A file stem that never exists, so only defaults and env apply.
const NO_FILE: &str = "autholas-config-tests-missing";

#[test]
#[serial]
fn defaults_load_but_fail_validation_without_key() {
    clear_env();

    let config = AutholasConfig::load_from(NO_FILE).unwrap();

    assert_eq!(config.api.url, DEFAULT_API_URL);
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.api.device_name, "User PC");
    assert!(!config.logging.enabled);
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear_env();
    env::set_var("AUTHOLAS_API_URL", "http://localhost:9000/api/auth");
    env::set_var("AUTHOLAS_API_KEY", "env-key");
    env::set_var("AUTHOLAS_TIMEOUT_SECS", "3");
    env::set_var("AUTHOLAS_DEVICE_NAME", "CI Runner");
    env::set_var("AUTHOLAS_LOGGING_ENABLED", "true");
    env::set_var("AUTHOLAS_LOG_LEVEL", "debug");

    let config = AutholasConfig::load_from(NO_FILE).unwrap();
    clear_env();

    assert_eq!(config.api.url, "http://localhost:9000/api/auth");
    assert_eq!(config.api.key, "env-key");
    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.api.device_name, "CI Runner");
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn unparsable_timeout_env_is_rejected() {
    clear_env();
    env::set_var("AUTHOLAS_TIMEOUT_SECS", "soon");

    let result = AutholasConfig::load_from(NO_FILE);
    clear_env();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("AUTHOLAS_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn unparsable_logging_flag_is_rejected() {
    clear_env();
    env::set_var("AUTHOLAS_LOGGING_ENABLED", "yes");

    let result = AutholasConfig::load_from(NO_FILE);
    clear_env();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("AUTHOLAS_LOGGING_ENABLED"));
}

#[test]
#[serial]
fn padded_numeric_env_is_accepted() {
    clear_env();
    env::set_var("AUTHOLAS_TIMEOUT_SECS", " 15 ");

    let config = AutholasConfig::load_from(NO_FILE).unwrap();
    clear_env();

    assert_eq!(config.api.timeout_secs, 15);
}

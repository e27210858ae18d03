
use belt::{BeltError, Config};
use std::env;
use std::fs;
use tempfile::TempDir;
use test_utils::{capture_sink, lock_global_state, restore_defaults};

fn clear_belt_env() {
    env::remove_var("BELT_VERBOSE");
    env::remove_var("BELT_LOG_PREFIX");
    env::remove_var("BELT_LOG_TIMESTAMPS");
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.verbose);
    assert_eq!(config.log_prefix, None);
    assert!(config.log_timestamps);
}

#[test]
fn test_config_from_env_empty() {
    let _lock = lock_global_state();
    clear_belt_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_from_env_values() {
    let _lock = lock_global_state();
    clear_belt_env();

    env::set_var("BELT_VERBOSE", "true");
    env::set_var("BELT_LOG_PREFIX", "[app] ");
    env::set_var("BELT_LOG_TIMESTAMPS", "false");

    let config = Config::from_env().unwrap();
    assert!(config.verbose);
    assert_eq!(config.log_prefix, Some("[app] ".to_string()));
    assert!(!config.log_timestamps);

    clear_belt_env();
}

#[test]
fn test_config_from_env_invalid_bool() {
    let _lock = lock_global_state();
    clear_belt_env();

    env::set_var("BELT_VERBOSE", "definitely");

    let result = Config::from_env();
    assert!(matches!(result, Err(BeltError::Env(_))));

    clear_belt_env();
}

#[test]
fn test_config_load_with_env_missing_file() {
    let _lock = lock_global_state();
    clear_belt_env();
    let temp_dir = TempDir::new().unwrap();

    let config = Config::load_with_env(&temp_dir.path().join(".env")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_with_env_file() {
    let _lock = lock_global_state();
    clear_belt_env();
    let temp_dir = TempDir::new().unwrap();
    let dotenv_path = temp_dir.path().join(".env");

    fs::write(&dotenv_path, "BELT_VERBOSE=true\nBELT_LOG_PREFIX=file\n").unwrap();

    // Environment wins over the file
    env::set_var("BELT_LOG_PREFIX", "env");

    let config = Config::load_with_env(&dotenv_path).unwrap();
    assert!(config.verbose);
    assert_eq!(config.log_prefix, Some("env".to_string()));

    clear_belt_env();
}

#[test]
fn test_config_load_with_env_malformed_file() {
    let _lock = lock_global_state();
    clear_belt_env();
    let temp_dir = TempDir::new().unwrap();
    let dotenv_path = temp_dir.path().join(".env");

    fs::write(&dotenv_path, "not a valid line\n").unwrap();

    let result = Config::load_with_env(&dotenv_path);
    assert!(matches!(result, Err(BeltError::DotEnv(_))));

    clear_belt_env();
}

#[test]
fn test_config_apply() {
    let _lock = lock_global_state();
    let buffer = capture_sink();

    let config = Config {
        verbose: true,
        log_prefix: Some("app: ".to_string()),
        log_timestamps: false,
    };
    config.apply();

    assert!(belt::is_verbose());
    belt::debug!("applied");
    assert_eq!(buffer.contents(), "app: applied\n");

    restore_defaults();
}

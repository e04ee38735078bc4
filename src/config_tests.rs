//! Tests for configuration loading.

use std::io::Write;

use serial_test::serial;

use crate::config::Config;

#[test]
#[serial]
fn test_missing_file_yields_defaults() {
    std::env::remove_var("GRAPHKIT_LOG__LEVEL");
    let config = Config::load("does-not-exist.toml").unwrap();
    assert_eq!(config.log.level, "info");
    assert!(!config.log.json);
    assert!(config.cache.default_ttl_secs.is_none());
}

#[test]
#[serial]
fn test_load_from_toml_file() {
    std::env::remove_var("GRAPHKIT_LOG__LEVEL");
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[log]\nlevel = \"debug\"\njson = true\n\n[cache]\ndefault_ttl_secs = 60\n"
    )
    .unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
    assert_eq!(config.cache.default_ttl_secs, Some(60));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[log]\nlevel = \"debug\"\n").unwrap();

    std::env::set_var("GRAPHKIT_LOG__LEVEL", "warn");
    let config = Config::load(file.path().to_str().unwrap());
    std::env::remove_var("GRAPHKIT_LOG__LEVEL");

    assert_eq!(config.unwrap().log.level, "warn");
}

#[test]
#[serial]
fn test_malformed_file_surfaces_config_load_code() {
    std::env::remove_var("GRAPHKIT_LOG__LEVEL");
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[log]\nlevel = 12345\n").unwrap();

    let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.code(), "config_load");
}

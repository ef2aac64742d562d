// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件 + 覆写的加载与优先级
// ==========================================

use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;
use well_scheduler::config::{config_keys, ConfigError, ConfigManager, ServiceConfig};
use well_scheduler::AssignmentMode;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_without_file() {
    let config = ConfigManager::new(None, HashMap::new())
        .load()
        .expect("Failed to load config");

    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.port, 8000);
    assert_eq!(config.assignment_mode, AssignmentMode::MaxCoverage);
    assert_eq!(config.bind_address(), "0.0.0.0:8000");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config(r#"{"port": 9100, "assignment_mode": "EXACTLY_ONCE"}"#);
    let config = ConfigManager::new(Some(file.path().to_path_buf()), HashMap::new())
        .load()
        .expect("Failed to load config");

    assert_eq!(config.port, 9100);
    assert_eq!(config.assignment_mode, AssignmentMode::ExactlyOnce);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.max_model_variables, 100_000);
}

#[test]
fn test_overrides_take_precedence_over_file() {
    let file = write_config(r#"{"port": 9100, "max_model_variables": 10}"#);
    let config = ConfigManager::new(
        Some(file.path().to_path_buf()),
        overrides(&[
            (config_keys::PORT, "9200"),
            (config_keys::ASSIGNMENT_MODE, "at-most-once"),
            (config_keys::MAX_MODEL_VARIABLES, "0"),
        ]),
    )
    .load()
    .expect("Failed to load config");

    assert_eq!(config.port, 9200);
    assert_eq!(config.assignment_mode, AssignmentMode::AtMostOnce);
    assert_eq!(config.max_model_variables, 0);
}

#[test]
fn test_invalid_override_names_key() {
    let result = ConfigManager::new(None, overrides(&[(config_keys::PORT, "eighty")])).load();

    match result {
        Err(ConfigError::InvalidValue { key, value, .. }) => {
            assert_eq!(key, config_keys::PORT);
            assert_eq!(value, "eighty");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("{ not json");
    let result = ConfigManager::new(Some(file.path().to_path_buf()), HashMap::new()).load();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.json");
    let result = ConfigManager::new(Some(path), HashMap::new()).load();
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

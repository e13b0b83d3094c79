use termtask::config::Config;
use termtask::constants::DEFAULT_DATETIME_FORMAT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.datetime_format, DEFAULT_DATETIME_FORMAT);
    assert_eq!(config.display.title_width, 40);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(!config.events.enabled);
    assert!(config.events.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Title width outside the allowed range should fail
    config.display.title_width = 5;
    assert!(config.validate().is_err());
    config.display.title_width = 500;
    assert!(config.validate().is_err());

    // Reset and test a bad datetime format
    config.display.title_width = 40;
    config.display.datetime_format = "%Q".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.display.datetime_format = DEFAULT_DATETIME_FORMAT.to_string();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("title_width = 40"));
    assert!(toml_str.contains("datetime_format = \"%Y-%m-%d %H:%M\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[display]
title_width = 60

[events]
enabled = true
file = "/tmp/events.jsonl"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.display.title_width, 60);
    assert!(config.events.enabled);
    assert_eq!(
        config.events.file.as_deref(),
        Some(std::path::Path::new("/tmp/events.jsonl"))
    );

    // Check that unspecified values use defaults
    assert_eq!(config.display.datetime_format, DEFAULT_DATETIME_FORMAT);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.display.title_width, default_config.display.title_width);
    assert_eq!(
        config.display.datetime_format,
        default_config.display.datetime_format
    );
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.events.enabled, default_config.events.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termtask.toml");
    std::fs::write(&path, "[display]\ntitle_width = 2\n").unwrap();

    let result = Config::load_from_file(&path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("title_width"));
}

#[test]
fn test_load_from_file_reports_missing_file() {
    let result = Config::load_from_file("/definitely/not/here/termtask.toml");
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read config file"));
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("termtask_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and parses back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# termtask configuration file"));
    assert!(content.contains("title_width = 40"));
    let reparsed: Config = toml::from_str(&content).unwrap();
    assert!(reparsed.validate().is_ok());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_logging_file_path_prefers_configured_value() {
    let mut config = Config::default();
    config.logging.file = Some("/tmp/custom.log".into());
    assert_eq!(
        config.logging.file_path(),
        std::path::PathBuf::from("/tmp/custom.log")
    );

    config.events.file = Some("/tmp/custom-events.jsonl".into());
    assert_eq!(
        config.events.file_path(),
        std::path::PathBuf::from("/tmp/custom-events.jsonl")
    );
}

use recordgrid::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.table.page_size, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("recordgrid/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"[table]
page_size = 12

[ui]
tick_rate_ms = 100

[logging]
filter = "recordgrid=debug"
file = "/tmp/recordgrid-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.table.page_size, 12);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.filter, "recordgrid=debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/recordgrid-test.log"))
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[table\npage_size = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = write_config("[table]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from(dir.path()),
        Err(ConfigError::ReadError { .. })
    ));
}

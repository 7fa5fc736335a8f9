// tests/config_test.rs
use client_version::config::{load_config, Config, LOCAL_CONFIG_FILE};
use client_version::VersionError;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.client.current_version, None);
    assert_eq!(config.behavior.include_prereleases, false);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[client]
current_version = "v3.0.1"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.client.current_version.as_deref(), Some("v3.0.1"));
    assert_eq!(config.behavior.include_prereleases, false);
}

#[test]
fn test_load_fixture_with_behavior() {
    let config = load_config(Some("tests/fixtures/config_with_behavior.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.client.current_version.as_deref(), Some("2.1.0"));
    assert_eq!(config.behavior.include_prereleases, true);
}

#[test]
fn test_load_missing_explicit_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VersionError::Io(_)));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[behavior\ninclude_prereleases = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VersionError::Config(_)));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[client]\ncurrent_version = \"0.9.0-beta3\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.client.current_version.as_deref(), Some("0.9.0-beta3"));
}

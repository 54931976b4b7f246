//! Integration tests: config file on disk driving translation output.

use std::fs;
use std::path::PathBuf;

use streamkeys_cli::config::{AppConfig, OutputFormat};
use streamkeys_cli::translate_args;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "streamkeys-{name}-{}.toml",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn test_config_file_selects_json_output() {
    // Arrange
    let path = write_temp_config("json", "[output]\nformat = \"json\"\n");

    // Act
    let config = AppConfig::load(&path).unwrap();
    let mut out = Vec::new();
    translate_args(&["KEYCODE_ENTER".to_string()], config.output.format, &mut out).unwrap();
    fs::remove_file(&path).ok();

    // Assert
    assert_eq!(config.output.format, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["code"], 0x800D);
    assert_eq!(value["vk"], "VK_RETURN");
}

#[test]
fn test_malformed_config_file_is_rejected() {
    let path = write_temp_config("bad", "[output\nformat = ");
    let result = AppConfig::load(&path);
    fs::remove_file(&path).ok();
    assert!(result.is_err());
}

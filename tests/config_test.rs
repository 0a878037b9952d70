//! Tests for TOML configuration loading.

use rewind_tictactoe::SortOrder;
use std::fs;
use std::path::PathBuf;
use strictly_rewind::RewindConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = RewindConfig::load_or_default(dir.path().join("absent.toml"))
        .expect("defaults for missing file");
    assert_eq!(config, RewindConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.sort_order(), &SortOrder::Ascending);
}

#[test]
fn test_full_config_parses() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind.toml");
    fs::write(
        &path,
        r#"log_filter = "debug,rewind_tictactoe=trace"
log_file = "/tmp/rewind.log"
sort_order = "descending"
"#,
    )
    .expect("Failed to write TOML");

    let config = RewindConfig::from_file(&path).expect("valid config");
    assert_eq!(config.log_filter(), "debug,rewind_tictactoe=trace");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind.log"));
    assert_eq!(config.sort_order(), &SortOrder::Descending);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind.toml");
    fs::write(&path, "sort_order = \"descending\"\n").expect("Failed to write TOML");

    let config = RewindConfig::load_or_default(&path).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("strictly_rewind.log"));
    assert_eq!(config.sort_order(), &SortOrder::Descending);
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "sort_order = sideways !!!").expect("Write failed");

    let err = RewindConfig::load_or_default(&path).expect_err("invalid config");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_with_sort_order_overrides() {
    let config = RewindConfig::default().with_sort_order(SortOrder::Descending);
    assert_eq!(config.sort_order(), &SortOrder::Descending);
}

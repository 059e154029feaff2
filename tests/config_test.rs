//! Tests for loading settings from disk.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_timeline::{Settings, SortOrder};

#[test]
fn test_load_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "sort_order = \"descending\"\nlog_file = \"ttt.log\"\nlog_filter = \"debug\""
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.sort_order(), SortOrder::Descending);
    assert_eq!(settings.log_file(), &PathBuf::from("ttt.log"));
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

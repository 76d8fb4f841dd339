//! Tests for loading settings files.

use rewind_games::{Settings, SortOrder};
use std::io::Write;
use std::path::Path;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[display]
sort_order = "descending"
show_coordinates = false

[logging]
level = "debug"
file = "custom.log"
"#,
    );

    let settings = Settings::load(Some(file.path())).expect("valid config");
    assert_eq!(*settings.display().sort_order(), SortOrder::Descending);
    assert!(!*settings.display().show_coordinates());
    assert_eq!(settings.logging().level(), "debug");
    assert_eq!(settings.logging().file(), Path::new("custom.log"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let settings = Settings::load(Some(file.path())).expect("valid config");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[display]\nsort_order = \"sideways\"\n");
    let err = Settings::load(Some(file.path())).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_sort_override() {
    let settings = Settings::default().with_sort_order(SortOrder::Descending);
    assert_eq!(*settings.display().sort_order(), SortOrder::Descending);
}

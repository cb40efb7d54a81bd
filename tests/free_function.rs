//! `read_version_string` against the file named by UNMANIC_VERSION_FILE

use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;
use unmanic_metadata::config::VERSION_FILE_ENV;
use unmanic_metadata::{UNKNOWN_VERSION, read_version_string};

fn point_version_file_at(path: &Path) {
    // SAFETY: every test touching the variable is #[serial], so no other
    // thread reads the environment concurrently.
    unsafe { std::env::set_var(VERSION_FILE_ENV, path) };
}

#[test]
#[serial]
fn reads_default_and_named_keys_from_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.json");
    std::fs::write(&path, r#"{"long": "0.2.8~a1b2c3d", "short": "0.2.8"}"#).unwrap();
    point_version_file_at(&path);

    assert_eq!(read_version_string(None), "0.2.8~a1b2c3d");
    assert_eq!(read_version_string(None), read_version_string(Some("long")));
    assert_eq!(read_version_string(Some("short")), "0.2.8");
    assert_eq!(read_version_string(Some("missing_key")), UNKNOWN_VERSION);
}

#[test]
#[serial]
fn returns_unknown_when_configured_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    point_version_file_at(&temp_dir.path().join("version.json"));

    assert_eq!(read_version_string(None), UNKNOWN_VERSION);
    assert_eq!(read_version_string(Some("short")), UNKNOWN_VERSION);
}

#[test]
#[serial]
fn returns_unknown_when_configured_file_is_not_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.json");
    std::fs::write(&path, "not json").unwrap();
    point_version_file_at(&path);

    assert_eq!(read_version_string(None), UNKNOWN_VERSION);
}

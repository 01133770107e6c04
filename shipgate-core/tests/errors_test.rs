//! Tests for the shipgate error handling system.

use std::path::PathBuf;

use shipgate_core::errors::*;

#[test]
fn every_error_carries_a_code() {
    let run = RunError::RootUnreadable {
        path: PathBuf::from("/nope"),
    };
    assert_eq!(run.error_code(), "ROOT_UNREADABLE");

    let scan = ScanError::NotADirectory {
        path: PathBuf::from("/file"),
    };
    assert_eq!(scan.error_code(), "SCAN_ERROR");

    let config = ConfigError::Invalid {
        path: PathBuf::from("shipgate.toml"),
        message: "bad".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}

#[test]
fn from_conversions_preserve_codes() {
    let scan = ScanError::NotADirectory {
        path: PathBuf::from("/file"),
    };
    let run: RunError = scan.into();
    assert_eq!(run.error_code(), "SCAN_ERROR");

    let config = ConfigError::Invalid {
        path: PathBuf::from("shipgate.toml"),
        message: "bad".into(),
    };
    let run: RunError = config.into();
    assert_eq!(run.error_code(), "CONFIG_ERROR");
}

#[test]
fn tagged_strings_prefix_the_code() {
    let run = RunError::RootUnreadable {
        path: PathBuf::from("/nope"),
    };
    let tagged = run.tagged();
    assert!(tagged.starts_with("[ROOT_UNREADABLE]"));
    assert!(tagged.contains("/nope"));
}

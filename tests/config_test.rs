//! Settings loading from disk.

use std::io::Write;
use tictactoe_engine::{HistoryMode, Settings};

#[test]
fn test_from_file_reads_all_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[engine]
history_mode = "legacy"
undo_when_finished = true

[ui]
notice_ms = 2000
tick_ms = 25
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.engine().history_mode(), HistoryMode::Legacy);
    assert!(*settings.engine().undo_when_finished());
    assert_eq!(*settings.ui().notice_ms(), 2000);
    assert_eq!(*settings.ui().tick_ms(), 25);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ui]\ntick_ms = 40").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.engine().history_mode(), HistoryMode::Restore);
    assert!(!*settings.engine().undo_when_finished());
    assert_eq!(*settings.ui().notice_ms(), 1500);
    assert_eq!(*settings.ui().tick_ms(), 40);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine\nhistory_mode = ").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

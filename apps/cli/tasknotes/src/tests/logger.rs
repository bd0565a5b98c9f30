// Unit tests for logger module initialization logic
// Tests focus on thread-safety and error handling

use crate::logger::{LOG_FILE_NAME, initialize, initialize_internal, level_for};

use std::path::PathBuf;

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: fern refuses to install a second global logger, and
/// every command path must be able to call initialize() safely.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A log directory that does not exist yet
    let temp_dir = TempDir::new().expect("temp dir");
    let log_dir = temp_dir.path().join("logs");

    // WHEN: Calling initialize twice
    let result1 = initialize(&log_dir, LevelFilter::Info);
    let result2 = initialize(&log_dir, LevelFilter::Info);

    // THEN: Both return Ok and the log file was created
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(result2.is_ok(), "Second initialization should be a no-op");
    assert!(log_dir.join(LOG_FILE_NAME).exists());
}

/// **VALUE**: An unusable log directory is reported, not a panic.
///
/// **BUG THIS CATCHES**: Would catch `create_dir_all` or `fern::log_file` being
/// unwrapped.
#[test]
fn given_invalid_log_dir_when_initializing_then_returns_error() {
    // GIVEN: A path under a file, which can never be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Initializing the dispatch directly (bypasses the global guard)
    let result = initialize_internal(&invalid_dir, LevelFilter::Info);

    // THEN: Tasknotes error, nothing installed
    let err = result.expect_err("Should fail for invalid log directory");
    assert!(format!("{err:?}").contains("Tasknotes"));
}

/// **VALUE**: `--verbose` always means trace.
#[test]
fn given_verbose_flag_when_choosing_level_then_trace() {
    assert_eq!(level_for(true), LevelFilter::Trace);
    assert!(level_for(false) < LevelFilter::Trace);
}

//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to the application profile
//! directory and automatic rotation on application startup keeping 10
//! historical files.

use crate::error::Result;
use crate::utils::paths::profile_dir;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment
/// variable. Rotates existing logs on startup to maintain a history of the
/// last 10 sessions.
pub fn init_logging() -> Result<()> {
    let log_dir = profile_dir();
    std::fs::create_dir_all(&log_dir)?;

    // Rotate existing log files on startup
    let log_path = log_dir.join("app.log");
    rotate_logs_on_startup(&log_path)?;

    // Note: tracing_appender's RollingFileAppender doesn't support startup-based
    // rotation with our desired file retention policy, so rotation is manual
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| crate::error::VitrinaError::LoggingError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| crate::error::VitrinaError::LoggingError(Box::new(e)))?;

    tracing::info!("vitrina v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// Rotates existing logs to maintain a history of the last 10 application
/// sessions:
/// - app.log.9 is deleted (oldest log)
/// - app.log.8 -> app.log.9, and so on down to app.log.1 -> app.log.2
/// - app.log -> app.log.1
/// - A fresh app.log will be created by the logger
fn rotate_logs_on_startup(log_path: &PathBuf) -> Result<()> {
    // If the current log doesn't exist, nothing to rotate
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        crate::error::VitrinaError::LoggingError(crate::error::StringError::new(
            "Invalid log path",
        ))
    })?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| {
            crate::error::VitrinaError::LoggingError(crate::error::StringError::new(
                "Invalid log filename",
            ))
        })?
        .to_string_lossy();

    // Delete the oldest log file if it exists
    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    // Rotate numbered log files upward
    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    // Rotate the current log file
    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    tracing::info!("Log rotation completed on startup");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_log(path: &PathBuf, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_rotate_logs_on_startup_basic() {
        let temp_dir = crate::test_utils::create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        create_test_log(&log_path, "Session 1 log content");
        rotate_logs_on_startup(&log_path).unwrap();

        let log_1 = temp_dir.path().join("app.log.1");
        assert!(log_1.exists(), "app.log.1 should exist after rotation");
        assert!(
            !log_path.exists(),
            "app.log should not exist after rotation (will be created fresh by logger)"
        );
        assert_eq!(fs::read_to_string(&log_1).unwrap(), "Session 1 log content");
    }

    #[test]
    fn test_rotate_logs_on_startup_multiple_rotations() {
        let temp_dir = crate::test_utils::create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        for i in 1..=5 {
            create_test_log(&log_path, &format!("Session {i} log content"));
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=5 {
            let log_i = temp_dir.path().join(format!("app.log.{i}"));
            assert!(log_i.exists(), "app.log.{i} should exist");

            let content = fs::read_to_string(&log_i).unwrap();
            let expected_session = 6 - i; // Most recent is in .1, oldest in .5
            assert_eq!(content, format!("Session {expected_session} log content"));
        }

        assert!(!log_path.exists(), "app.log should not exist after rotation");
    }

    #[test]
    fn test_rotate_logs_on_startup_respects_max_files() {
        let temp_dir = crate::test_utils::create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        for i in 1..=12 {
            create_test_log(&log_path, &format!("Session {i} log content"));
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=MAX_LOG_FILES {
            assert!(
                temp_dir.path().join(format!("app.log.{i}")).exists(),
                "app.log.{i} should exist (within MAX_LOG_FILES)"
            );
        }
        assert!(
            !temp_dir.path().join("app.log.10").exists(),
            "app.log.10 should not exist (beyond MAX_LOG_FILES)"
        );

        // Sessions 1-3 were deleted; session 4 is now in app.log.9
        let content = fs::read_to_string(temp_dir.path().join("app.log.9")).unwrap();
        assert_eq!(content, "Session 4 log content");

        let content = fs::read_to_string(temp_dir.path().join("app.log.1")).unwrap();
        assert_eq!(content, "Session 12 log content");
    }

    #[test]
    fn test_rotate_logs_on_startup_no_existing_log() {
        let temp_dir = crate::test_utils::create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        assert!(rotate_logs_on_startup(&log_path).is_ok());
        assert!(!log_path.exists());
        assert!(!temp_dir.path().join("app.log.1").exists());
    }

    #[test]
    fn test_rotate_logs_on_startup_partial_history() {
        let temp_dir = crate::test_utils::create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        // Current log plus a gappy history
        create_test_log(&log_path, "Current session");
        create_test_log(&temp_dir.path().join("app.log.1"), "Previous session");
        create_test_log(&temp_dir.path().join("app.log.5"), "Very old session");

        rotate_logs_on_startup(&log_path).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.1")).unwrap(),
            "Current session"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.2")).unwrap(),
            "Previous session"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.6")).unwrap(),
            "Very old session"
        );
    }
}

//! Tracing subscriber initialization.
//!
//! The overlay runs inside a render loop, so logs go to a file by default.
//! The CLI can send them to stderr instead with `--verbose`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, creating parent directories as needed.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Split a log path into its directory and file name.
///
/// A bare file name resolves to the current directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

/// Initialize the tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable, defaulting to `info`.
///
/// # Errors
///
/// Fails if the log directory can't be created, the path has no file name,
/// or a global subscriber is already installed.
pub fn init(target: &LogTarget) -> Result<(), LoggingError> {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|_| LoggingError::SubscriberAlreadySet),
        LogTarget::File(log_path) => {
            let (directory, file_name) = split_log_path(log_path)?;

            std::fs::create_dir_all(&directory).map_err(|source| {
                LoggingError::DirectoryCreation {
                    path: directory.clone(),
                    source,
                }
            })?;

            let file_appender = tracing_appender::rolling::never(&directory, file_name);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI colors in log files
                .try_init()
                .map_err(|_| LoggingError::SubscriberAlreadySet)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn split_log_path_separates_directory_and_name() {
        let (dir, name) = split_log_path(Path::new("/var/log/pethover/app.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/pethover"));
        assert_eq!(name, "app.log");
    }

    #[test]
    fn split_log_path_bare_name_uses_current_dir() {
        let (dir, name) = split_log_path(Path::new("pethover.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "pethover.log");
    }

    #[test]
    fn split_log_path_rejects_root() {
        let result = split_log_path(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("pethover_test_logs_create");
        let log_file = test_dir.join("test.log");

        let _ = fs::remove_dir_all(&test_dir);

        // May fail if subscriber already set; directory is created first either way
        let _ = init(&LogTarget::File(log_file));

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("pethover_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&LogTarget::File(log_file.clone()));
        let result = init(&LogTarget::File(log_file));

        assert!(matches!(result, Err(LoggingError::SubscriberAlreadySet)));

        let _ = fs::remove_dir_all(&test_dir);
    }
}

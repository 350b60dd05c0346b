//! Error types for the rotating file sink.

use std::io;
use std::path::PathBuf;

/// Result type for file sink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while setting up or writing log files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to create the log directory.
    #[error("failed to create log directory at {path}: {source}")]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The day's log file could neither be opened for append nor created.
    #[error("log file unavailable at {path}: {source}")]
    SinkUnavailable {
        /// The file that could not be opened.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// Failed to serialize a record.
    #[error("failed to serialize log record: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Configuration for the rotating file sink.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory used when none is configured or the configured one is empty.
pub const DEFAULT_DIRECTORY: &str = "/data/logs";

/// Default filename prefix ahead of the `YYYY-MM-DD` date segment.
pub const DEFAULT_PREFIX: &str = "daylog.";

const DEFAULT_BUFFER_SIZE: usize = 10 * 1024 * 1024;

const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(3);

/// Configuration for [`FileSink`](crate::FileSink).
#[derive(Debug, Clone)]
pub struct FileSinkConfig {
    /// Directory log files are created in. An empty path falls back to
    /// [`DEFAULT_DIRECTORY`].
    pub directory: PathBuf,
    /// Filename prefix ahead of the date segment.
    pub prefix: String,
    /// Capacity of the in-memory buffered writer.
    pub buffer_size: usize,
    /// Interval between flush daemon ticks; rotation latency is bounded by
    /// it.
    pub flush_interval: Duration,
}

impl FileSinkConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> FileSinkConfigBuilder {
        FileSinkConfigBuilder::new()
    }

    /// Path of the log file for `date`.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        let directory = if self.directory.as_os_str().is_empty() {
            Path::new(DEFAULT_DIRECTORY)
        } else {
            self.directory.as_path()
        };
        directory.join(format!("{}{}", self.prefix, date.format("%Y-%m-%d")))
    }
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            prefix: DEFAULT_PREFIX.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

/// Builder for [`FileSinkConfig`].
pub struct FileSinkConfigBuilder {
    config: FileSinkConfig,
}

impl FileSinkConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FileSinkConfig::default(),
        }
    }

    /// Set the log directory.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = directory.into();
        self
    }

    /// Set the filename prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the buffered writer capacity.
    #[must_use]
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.buffer_size = buffer_size;
        self
    }

    /// Set the flush daemon interval.
    #[must_use]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.config.flush_interval = interval;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> FileSinkConfig {
        self.config
    }
}

impl Default for FileSinkConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

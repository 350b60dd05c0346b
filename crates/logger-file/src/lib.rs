//! Rotating, buffered file sink for `daylog-logger`.
//!
//! Records surviving the level gate are serialized to newline-delimited JSON
//! and appended to one file per calendar day, `<prefix><YYYY-MM-DD>`, through
//! a buffered writer. A background task flushes the buffer on a fixed
//! interval and swaps in the new day's file when the date advances, so
//! rotation latency is bounded by the flush interval.
//!
//! ```no_run
//! use daylog_logger::{LevelFilter, Logger};
//! use daylog_logger_file::{FileSink, FileSinkConfig};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> daylog_logger_file::Result<()> {
//! let filter = Arc::new(LevelFilter::default());
//! let config = FileSinkConfig::builder()
//!     .directory("/var/log/myapp")
//!     .build();
//! let sink = FileSink::start(config, filter.clone())?;
//!
//! let logger = Logger::new(Arc::new(sink), filter);
//! logger.error("db", "conn lost", None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod writer;

pub use config::{DEFAULT_DIRECTORY, DEFAULT_PREFIX, FileSinkConfig, FileSinkConfigBuilder};
pub use error::{Error, Result};
pub use writer::FileSink;

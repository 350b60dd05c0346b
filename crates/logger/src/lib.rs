//! Structured logging core: leveled JSON records, process identity, and
//! synchronous per-level alarm dispatch.
//!
//! The [`Logger`] context object is constructed once at process startup and
//! shared (`Arc<Logger>`) with everything that logs. It stamps each record
//! with the wall-clock time, the process [`Identity`], and the application
//! call site, fires any alarm handler registered for the record's level, and
//! hands the finished record to a [`Sink`].
//!
//! Sinks own filtering and persistence; the rotating file sink lives in the
//! `daylog-logger-file` crate. Entry points are fire-and-forget: they return
//! nothing and never surface sink failures to the caller.
//!
//! ```
//! use daylog_logger::{LevelFilter, Logger, test_support::CaptureSink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let filter = Arc::new(LevelFilter::default());
//! let logger = Logger::new(sink.clone(), filter);
//!
//! logger.set_identity("dc1", "10.0.0.1", "1.0.0");
//! logger.error("db", "conn lost", None);
//!
//! assert!(sink.contains("conn lost"));
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod alarm;
mod identity;
mod level;
mod logger;
mod record;
mod sink;

pub mod test_support;

pub use alarm::{AlarmHandler, AlarmRegistry};
pub use identity::Identity;
pub use level::{Level, LevelFilter, ParseLevelError};
pub use logger::Logger;
pub use record::{META_CATEGORY_KEY, Record, TIME_FORMAT};
pub use sink::Sink;

//! The process-wide logging context object.

use crate::{AlarmRegistry, Identity, Level, LevelFilter, Record, Sink};
use arc_swap::ArcSwap;
use serde_json::{Map, Value};
use std::panic::Location;
use std::sync::Arc;

/// Owns the process-wide logging state: identity, minimum level, alarm
/// handlers, and the sink records are written to.
///
/// Construct one at startup and share it (`Arc<Logger>`) with every component
/// that logs. Entry points are fire-and-forget: they return nothing and never
/// surface sink failures.
///
/// Five levels can be emitted directly: [`debug`](Self::debug),
/// [`info`](Self::info), [`error`](Self::error),
/// [`critical`](Self::critical), and [`emergency`](Self::emergency).
/// `notice`, `warning`, and `alert` carry ranks for filter thresholds and
/// alarm registration but have no emit method.
pub struct Logger {
    identity: ArcSwap<Identity>,
    filter: Arc<LevelFilter>,
    alarms: AlarmRegistry,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger writing to `sink`, gated by `filter`.
    ///
    /// Give the sink a clone of the same `filter` handle so that
    /// [`set_min_level`](Self::set_min_level) takes effect on its write path
    /// immediately.
    pub fn new(sink: Arc<dyn Sink>, filter: Arc<LevelFilter>) -> Self {
        Self {
            identity: ArcSwap::from_pointee(Identity::default()),
            filter,
            alarms: AlarmRegistry::new(),
            sink,
        }
    }

    /// Replace the identity stamped into subsequent records.
    pub fn set_identity(&self, idc: &str, ip: &str, ver: &str) {
        self.identity.store(Arc::new(Identity::new(idc, ip, ver)));
    }

    /// Current identity snapshot.
    #[must_use]
    pub fn identity(&self) -> Arc<Identity> {
        self.identity.load_full()
    }

    /// Set the minimum severity by name. Unknown names are ignored.
    pub fn set_min_level(&self, name: &str) {
        self.filter.set(name);
    }

    /// Register an alarm handler for `level`. The last registration wins.
    ///
    /// The handler runs synchronously on the emitting thread, before the
    /// record reaches the sink and outside any sink lock, so a handler that
    /// itself logs cannot deadlock.
    pub fn register_alarm<F>(&self, level: Level, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.alarms.register(level, handler);
    }

    /// Force buffered records to their destination.
    pub fn flush(&self) {
        self.sink.flush();
    }

    /// Diagnostic detail for development.
    #[track_caller]
    pub fn debug(&self, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        self.emit(Level::Debug, cate, msg, meta);
    }

    /// Routine operational events.
    #[track_caller]
    pub fn info(&self, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        self.emit(Level::Info, cate, msg, meta);
    }

    /// Runtime errors.
    #[track_caller]
    pub fn error(&self, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        self.emit(Level::Error, cate, msg, meta);
    }

    /// A component is unavailable or failed unexpectedly.
    #[track_caller]
    pub fn critical(&self, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        self.emit(Level::Critical, cate, msg, meta);
    }

    /// The system is unusable.
    #[track_caller]
    pub fn emergency(&self, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        self.emit(Level::Emergency, cate, msg, meta);
    }

    /// Shared emit path: build, alarm, then hand off to the sink.
    ///
    /// `#[track_caller]` propagates the application call site through the
    /// public entry points into the record, skipping these internal frames.
    /// The alarm fires before the sink's level gate, so it triggers even for
    /// records the sink goes on to drop.
    #[track_caller]
    fn emit(&self, level: Level, cate: &str, msg: &str, meta: Option<Map<String, Value>>) {
        let record = Record::build(
            level,
            cate,
            msg,
            meta,
            self.identity.load_full(),
            Some(Location::caller()),
        );
        self.alarms.dispatch(level, &record.alarm_payload());
        self.sink.log(record);
    }
}

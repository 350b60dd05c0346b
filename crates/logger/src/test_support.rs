//! In-memory sink for asserting on emitted records in tests.

use crate::{Record, Sink};
use std::sync::{Arc, Mutex};

/// Sink that retains every record it receives, without any level gate.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// logger another.
#[derive(Clone, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Whether any captured message contains `text`.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|record| record.msg.contains(text))
    }

    /// Discard captured records.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Sink for CaptureSink {
    fn log(&self, record: Record) {
        self.records.lock().unwrap().push(record);
    }

    fn flush(&self) {}
}

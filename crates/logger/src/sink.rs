//! Sink abstraction consuming fully built records.

use crate::Record;

/// Destination for built records.
///
/// Implementations own their level gating and persistence. `log` must be
/// callable from any thread and must never propagate failures to the caller;
/// a sink that cannot persist a record reports it on its own diagnostic
/// channel and drops it.
pub trait Sink: Send + Sync + 'static {
    /// Consume one record.
    fn log(&self, record: Record);

    /// Force any buffered output to its destination.
    fn flush(&self);
}

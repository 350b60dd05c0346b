//! Per-level alarm callbacks, dispatched synchronously at event build time.

use crate::Level;
use dashmap::DashMap;
use std::sync::Arc;

/// Handler invoked with the short alarm payload for its level.
pub type AlarmHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Registry mapping each level to at most one alarm handler.
#[derive(Default)]
pub struct AlarmRegistry {
    handlers: DashMap<Level, AlarmHandler>,
}

impl AlarmRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Register `handler` for `level`. The last registration wins.
    pub fn register<F>(&self, level: Level, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.handlers.insert(level, Arc::new(handler));
    }

    /// Invoke the handler registered for exactly `level`, if any.
    ///
    /// The handler runs synchronously on the calling thread and blocks it
    /// until it returns. The handler is cloned out of the registry before the
    /// call, so a handler may itself register or dispatch without holding any
    /// registry lock.
    pub fn dispatch(&self, level: Level, payload: &str) {
        let handler = self
            .handlers
            .get(&level)
            .map(|entry| Arc::clone(entry.value()));
        if let Some(handler) = handler {
            handler(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispatch_without_handler_is_a_noop() {
        AlarmRegistry::new().dispatch(Level::Error, "[error-db]-down");
    }

    #[test]
    fn dispatch_invokes_exactly_once_with_payload() {
        let registry = AlarmRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let seen = calls.clone();
        registry.register(Level::Error, move |payload| {
            assert_eq!(payload, "[error-db]-down");
            seen.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(Level::Error, "[error-db]-down");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_levels_do_not_fire() {
        let registry = AlarmRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let seen = calls.clone();
        registry.register(Level::Error, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(Level::Critical, "[critical-db]-down");
        registry.dispatch(Level::Debug, "[debug-db]-down");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn last_registration_wins() {
        let registry = AlarmRegistry::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        registry.register(Level::Alert, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = second.clone();
        registry.register(Level::Alert, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(Level::Alert, "[alert-ops]-paged");
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_may_reenter_the_registry() {
        let registry = Arc::new(AlarmRegistry::new());
        let inner_calls = Arc::new(AtomicUsize::new(0));

        let counter = inner_calls.clone();
        registry.register(Level::Critical, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let reentrant = registry.clone();
        registry.register(Level::Error, move |_| {
            reentrant.dispatch(Level::Critical, "[critical-db]-cascade");
        });

        registry.dispatch(Level::Error, "[error-db]-down");
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    }
}

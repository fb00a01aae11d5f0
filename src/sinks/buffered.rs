//! In-memory rendering sink.

use super::{OverlaySink, RenderSink};
use crate::models::Annotation;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// An in-memory sink that records every applied collection.
///
/// Useful as a headless rendering target and as the standard test double:
/// the busy flag is settable by the embedder ([`set_busy`]), matching the
/// contract that busy state is owned by the sink, never the coordinator.
///
/// [`set_busy`]: BufferedSink::set_busy
#[derive(Debug, Default)]
pub struct BufferedSink {
    shown: Mutex<Vec<Annotation>>,
    busy: AtomicBool,
    apply_count: AtomicU64,
}

impl BufferedSink {
    /// Creates an idle, empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reported busy state.
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::Release);
    }

    /// Returns a copy of the most recently applied collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Annotation> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many collections have been applied so far.
    #[must_use]
    pub fn apply_count(&self) -> u64 {
        self.apply_count.load(Ordering::Acquire)
    }
}

impl RenderSink for BufferedSink {
    fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn apply(&self, annotations: Vec<Annotation>) {
        self.apply_count.fetch_add(1, Ordering::AcqRel);
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner) = annotations;
    }
}

impl OverlaySink for BufferedSink {
    fn clear_all(&self) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

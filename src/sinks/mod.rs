//! Rendering sink capabilities.
//!
//! Sinks are the asynchronous rendering targets driven by the
//! [`UpdateCoordinator`](crate::services::UpdateCoordinator). The
//! capability surface is deliberately small: a sink reports its own busy
//! state and accepts a freshly built collection to apply. Completion is
//! never reported synchronously and there is no cancellation; the
//! coordinator's generation guard supersedes stale applies instead.

mod buffered;

pub use buffered::BufferedSink;

use crate::models::Annotation;

/// A rendering target for filtered annotation collections.
///
/// `apply` is assumed total (non-throwing) and idempotent enough that
/// re-applying a stale-but-not-superseded collection is harmless.
pub trait RenderSink: Send + Sync {
    /// Reports whether the sink is still applying a previous collection.
    ///
    /// The busy state is owned and reported by the sink; the coordinator
    /// queries it at dispatch time and never tracks it independently.
    fn is_busy(&self) -> bool;

    /// Applies a filtered collection, replacing whatever was shown.
    fn apply(&self, annotations: Vec<Annotation>);
}

/// The overlay rendering target: a [`RenderSink`] that additionally
/// accepts a clear request, independent of filtering.
pub trait OverlaySink: RenderSink {
    /// Removes everything the overlay currently shows.
    fn clear_all(&self);
}

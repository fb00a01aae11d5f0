//! # Annoview
//!
//! Live annotation filtering with generation-guarded dispatch to
//! asynchronous rendering sinks.
//!
//! Annoview keeps an authoritative, unfiltered collection of annotations,
//! compiles filter queries into predicates, and drives two independent
//! rendering sinks (an overlay and a list) under a last-writer-wins
//! discipline: sinks report their own busy state, offer no cancellation,
//! and still never end up showing a result older than the most recent
//! filtering pass.
//!
//! ## Example
//!
//! ```rust,ignore
//! use annoview::{BufferedSink, LogNotifier, UpdateCoordinator};
//! use std::sync::Arc;
//!
//! let overlay = Arc::new(BufferedSink::new());
//! let mut coordinator =
//!     UpdateCoordinator::new(overlay.clone(), Arc::new(LogNotifier));
//! coordinator.set_annotations(annotations);
//! coordinator.set_filter_query("class:axon tag:reviewed");
//! ```
//!
//! The coordinator must run inside a current-thread Tokio runtime (or an
//! otherwise single-threaded embedding): dispatch to a busy sink is
//! deferred through a spawned task that yields once before re-checking
//! freshness, and that check-then-apply relies on cooperative scheduling
//! to be atomic. On a multi-thread runtime a deferred task could pass the
//! freshness check, get preempted, and land its apply after a newer
//! synchronous one.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod filter;
pub mod models;
pub mod notify;
pub mod observability;
pub mod services;
pub mod sinks;

// Re-exports for convenience
pub use filter::{FilterableAnnotation, Predicate, compile, preprocess};
pub use models::{Annotation, AnnotationId};
pub use notify::{LogNotifier, NotificationSurface};
pub use services::UpdateCoordinator;
pub use sinks::{BufferedSink, OverlaySink, RenderSink};

/// Error type for annoview operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait
/// implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `FilterParse` | A filter query is syntactically invalid |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A filter query failed to compile.
    ///
    /// Raised when:
    /// - A token uses an unknown filter key
    /// - A `key:` token is missing its value
    /// - An exclusion prefix (`-`) has nothing to negate
    /// - A quoted phrase is never terminated
    ///
    /// The message is human-readable and shown verbatim on the
    /// notification surface. The coordinator recovers locally: the
    /// previously active filter stays in effect.
    #[error("filter parse error: {0}")]
    FilterParse(String),
}

/// Result type alias for annoview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the current Unix timestamp in seconds.
///
/// Centralized utility so annotation construction sites do not duplicate
/// the epoch arithmetic. Falls back to 0 if the system clock is before
/// the Unix epoch.
#[must_use]
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

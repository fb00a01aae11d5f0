//! Generation-guarded view update coordination.
//!
//! The coordinator owns the authoritative annotation collection and the
//! active filter, recomputes the filtered view once per update, and
//! dispatches it independently to each rendering sink under a
//! last-writer-wins discipline.
//!
//! Sinks are asynchronous, report their own busy state, and offer no
//! cancellation. The guard works without one: every dispatch bumps the
//! sink's generation counter; a dispatch that finds the sink idle applies
//! immediately, while a dispatch that finds it busy spawns a task that
//! yields once and then applies only if no newer dispatch has bumped the
//! counter since. Superseded tasks become no-ops instead of being
//! cancelled, so a busy period produces at most one effective apply per
//! sink, and a sink never ends up showing a result older than the most
//! recent cycle.

use crate::filter::{self, Predicate, preprocess};
use crate::models::Annotation;
use crate::notify::NotificationSurface;
use crate::sinks::{OverlaySink, RenderSink};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::instrument;

/// Coordinates filtering and dispatch across the overlay and list sinks.
///
/// All state is mutated through `&mut self`; the deferred tasks capture
/// only the sink handle, the generation counter, and the already-computed
/// filtered collection, never the coordinator itself.
///
/// Must be used inside a current-thread Tokio runtime (or an otherwise
/// single-threaded embedding). The scheduling model is cooperative: the
/// deferred task's freshness check and its apply are two steps, and only
/// the absence of preemption between them keeps a stale apply from
/// landing after a newer synchronous one.
pub struct UpdateCoordinator {
    /// Authoritative, unfiltered collection, replaced wholesale.
    annotations: Vec<Annotation>,
    /// The active predicate. A failed compile never touches it.
    predicate: Predicate,
    /// Whether the active filter came from an empty query.
    filter_trivial: bool,
    /// Whether the most recently submitted query compiled.
    query_valid: bool,
    /// The overlay sink, always present.
    overlay: Arc<dyn OverlaySink>,
    overlay_generation: Arc<AtomicU64>,
    /// The list sink, bound via [`register_list_sink`].
    ///
    /// [`register_list_sink`]: UpdateCoordinator::register_list_sink
    list: Option<Arc<dyn RenderSink>>,
    list_generation: Arc<AtomicU64>,
    notifier: Arc<dyn NotificationSurface>,
}

impl UpdateCoordinator {
    /// Creates a coordinator with an empty collection and the trivial
    /// filter active.
    #[must_use]
    pub fn new(overlay: Arc<dyn OverlaySink>, notifier: Arc<dyn NotificationSurface>) -> Self {
        Self {
            annotations: Vec::new(),
            predicate: Predicate::match_all(),
            filter_trivial: true,
            query_valid: true,
            overlay,
            overlay_generation: Arc::new(AtomicU64::new(0)),
            list: None,
            list_generation: Arc::new(AtomicU64::new(0)),
            notifier,
        }
    }

    /// Replaces the unfiltered collection wholesale and runs one
    /// filter-and-dispatch cycle.
    #[instrument(skip_all, fields(count = annotations.len()))]
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
        self.run_cycle();
    }

    /// Compiles `query` and, on success, activates it and runs one cycle.
    ///
    /// On failure the active filter is left unchanged, the query state is
    /// marked invalid, the compile error is shown on the notification
    /// surface, and no cycle runs. Returns whether the query compiled.
    #[instrument(skip(self))]
    pub fn set_filter_query(&mut self, query: &str) -> bool {
        if self.compile_filter(query) {
            self.run_cycle();
            true
        } else {
            false
        }
    }

    /// Same compile-and-validate logic as [`set_filter_query`] but never
    /// dispatches. Used during initialization before sinks exist.
    ///
    /// [`set_filter_query`]: UpdateCoordinator::set_filter_query
    pub fn set_filter_query_without_update(&mut self, query: &str) -> bool {
        self.compile_filter(query)
    }

    /// Binds the list sink. Until this is called, list dispatch is
    /// skipped with a diagnostic while overlay dispatch and notification
    /// updates proceed normally.
    pub fn register_list_sink(&mut self, sink: Arc<dyn RenderSink>) {
        self.list = Some(sink);
    }

    /// Forwards a clear request directly to the overlay sink, bypassing
    /// the filter/dispatch pipeline entirely.
    pub fn clear(&self) {
        self.overlay.clear_all();
    }

    /// Re-runs one filter-and-dispatch cycle with the current collection
    /// and filter.
    pub fn refresh(&self) {
        self.run_cycle();
    }

    /// Current overlay generation counter value.
    #[must_use]
    pub fn overlay_generation(&self) -> u64 {
        self.overlay_generation.load(Ordering::Acquire)
    }

    /// Current list generation counter value.
    #[must_use]
    pub fn list_generation(&self) -> u64 {
        self.list_generation.load(Ordering::Acquire)
    }

    /// Whether the most recently submitted query compiled.
    #[must_use]
    pub const fn is_query_valid(&self) -> bool {
        self.query_valid
    }

    /// Whether the active filter matches everything.
    #[must_use]
    pub const fn is_filter_trivial(&self) -> bool {
        self.filter_trivial
    }

    /// Compiles and activates a query. Returns whether it compiled.
    fn compile_filter(&mut self, query: &str) -> bool {
        match filter::compile(query) {
            Ok(predicate) => {
                self.predicate = predicate;
                self.filter_trivial = query.trim().is_empty();
                self.query_valid = true;
                true
            },
            Err(err) => {
                self.query_valid = false;
                let message = err.to_string();
                tracing::debug!(error = %message, "filter query rejected");
                self.notifier.report_filter_error(&message);
                false
            },
        }
    }

    /// One full cycle: filter once, dispatch to each sink, update the
    /// notification surface.
    fn run_cycle(&self) {
        let filtered: Vec<Annotation> = self
            .annotations
            .iter()
            .filter(|a| self.predicate.evaluate(&preprocess(a)))
            .cloned()
            .collect();

        // The overlay shows filtering order; the list shows the same
        // sequence reversed. Neither sink re-sorts.
        Self::dispatch(
            &self.overlay,
            &self.overlay_generation,
            "overlay",
            filtered.clone(),
        );

        if let Some(list) = &self.list {
            let mut reversed = filtered.clone();
            reversed.reverse();
            Self::dispatch(list, &self.list_generation, "list", reversed);
        } else {
            tracing::warn!("no list sink registered, skipping list dispatch");
        }

        self.update_notification(self.annotations.len(), filtered.len());
    }

    /// Generation-guarded dispatch to one sink.
    ///
    /// Idle sink: apply synchronously. Busy sink: spawn a task that
    /// yields once, then applies only if this dispatch is still the
    /// newest one for the sink. Superseded tasks discard silently.
    ///
    /// The freshness check and the apply below are not atomic; the
    /// single-threaded cooperative scheduling documented on
    /// [`UpdateCoordinator`] guarantees no newer dispatch runs between
    /// them.
    fn dispatch<S>(
        sink: &Arc<S>,
        generation: &Arc<AtomicU64>,
        sink_label: &'static str,
        filtered: Vec<Annotation>,
    ) where
        S: RenderSink + ?Sized + 'static,
    {
        let my_generation = generation.fetch_add(1, Ordering::AcqRel) + 1;

        if sink.is_busy() {
            metrics::counter!("view_dispatch_deferred_total", "sink" => sink_label).increment(1);
            tracing::debug!(
                sink = sink_label,
                generation = my_generation,
                "sink busy, deferring apply"
            );
            let sink = Arc::clone(sink);
            let generation = Arc::clone(generation);
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                if generation.load(Ordering::Acquire) == my_generation {
                    metrics::counter!("view_dispatch_applied_total", "sink" => sink_label)
                        .increment(1);
                    sink.apply(filtered);
                } else {
                    metrics::counter!("view_dispatch_superseded_total", "sink" => sink_label)
                        .increment(1);
                    tracing::trace!(
                        sink = sink_label,
                        generation = my_generation,
                        "deferred apply superseded"
                    );
                }
            });
        } else {
            metrics::counter!("view_dispatch_applied_total", "sink" => sink_label).increment(1);
            sink.apply(filtered);
        }
    }

    /// Updates the notification surface after a cycle.
    fn update_notification(&self, total: usize, matched: usize) {
        if !self.query_valid {
            // Leave the compile error shown until the next query.
            return;
        }
        if self.filter_trivial {
            self.notifier.clear_counts();
        } else {
            self.notifier.report_counts(total, matched);
        }
    }
}

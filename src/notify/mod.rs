//! Notification surface for filter match counts and errors.

/// Receives filter match counts and compile errors for display.
///
/// The coordinator reports `(total, matched)` after every cycle run with a
/// valid, non-trivial filter, clears the counts when the trivial filter is
/// active, and shows compile errors verbatim. An error message stays shown
/// until the next query is submitted; the coordinator never clears it
/// explicitly.
pub trait NotificationSurface: Send + Sync {
    /// Shows how many of `total` annotations matched the active filter.
    fn report_counts(&self, total: usize, matched: usize);

    /// Clears any shown count.
    fn clear_counts(&self);

    /// Shows a filter compile error, replacing any shown count.
    fn report_filter_error(&self, message: &str);
}

/// Notification surface that logs through `tracing`.
///
/// The default choice for headless embedders that have no UI chrome to
/// hand the counts to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSurface for LogNotifier {
    fn report_counts(&self, total: usize, matched: usize) {
        tracing::info!(total, matched, "filter match counts");
    }

    fn clear_counts(&self) {
        tracing::debug!("filter counts cleared");
    }

    fn report_filter_error(&self, message: &str) {
        tracing::warn!(error = message, "filter query rejected");
    }
}

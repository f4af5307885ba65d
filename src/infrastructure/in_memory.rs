use crate::domain::ports::CustomerNotifier;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A thread-safe notifier that only counts the signals it receives.
///
/// Clones share the same counter, so a test can hand one clone to a strategy
/// and assert on the other. Ideal for testing where no real delivery is needed.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<AtomicUsize>,
}

impl RecordingNotifier {
    /// Creates a notifier that has not been notified yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received so far, across all clones.
    pub fn count(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }
}

impl CustomerNotifier for RecordingNotifier {
    fn notify_customer_ready(&self) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
    }
}

//! The per-record "copied" marker with its auto-clear timer.
//!
//! At most one record is marked at a time. Marking a record supersedes
//! the previous mark and its timer; a generation counter guarantees that a
//! superseded timer which already woke up cannot clear the newer mark.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use dropshare_core::types::FileId;

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    current: Option<FileId>,
    timer: Option<JoinHandle<()>>,
}

/// Tracks which record, if any, currently shows as copied.
#[derive(Debug, Clone)]
pub struct CopiedIndicator {
    inner: Arc<Mutex<Inner>>,
    hold: Duration,
}

impl CopiedIndicator {
    /// Create an indicator that clears `hold` after each mark.
    pub fn new(hold: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            hold,
        }
    }

    /// How long a mark lasts.
    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Mark `id` as copied, replacing any earlier mark.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mark(&self, id: FileId) {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.current = Some(id);
        if let Some(previous) = inner.timer.take() {
            previous.abort();
        }

        let generation = inner.generation;
        let shared = Arc::clone(&self.inner);
        let hold = self.hold;
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            let mut inner = lock(&shared);
            if inner.generation == generation {
                inner.current = None;
                inner.timer = None;
                debug!(file_id = %id, "Copied marker cleared");
            }
        }));

        debug!(file_id = %id, hold_ms = hold.as_millis() as u64, "Copied marker set");
    }

    /// The marked record, if any.
    pub fn current(&self) -> Option<FileId> {
        lock(&self.inner).current
    }

    /// Whether `id` is the marked record.
    pub fn is_marked(&self, id: FileId) -> bool {
        self.current() == Some(id)
    }

    /// Drop the mark immediately.
    pub fn clear(&self) {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.current = None;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(2000);

    #[tokio::test(start_paused = true)]
    async fn test_mark_clears_after_hold() {
        let indicator = CopiedIndicator::new(HOLD);
        let id = FileId::new();

        indicator.mark(id);
        assert!(indicator.is_marked(id));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(indicator.is_marked(id));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(indicator.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_mark_supersedes_previous_timer() {
        let indicator = CopiedIndicator::new(HOLD);
        let a = FileId::new();
        let b = FileId::new();

        indicator.mark(a);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        indicator.mark(b);
        assert!(!indicator.is_marked(a));
        assert!(indicator.is_marked(b));

        // A's original deadline passes without clearing B.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(indicator.is_marked(b));

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(indicator.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_timer() {
        let indicator = CopiedIndicator::new(HOLD);
        let id = FileId::new();

        indicator.mark(id);
        indicator.clear();
        assert_eq!(indicator.current(), None);

        indicator.mark(id);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(indicator.is_marked(id));
    }
}

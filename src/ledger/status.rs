//! Transaction status tracking for in-flight writes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::types::{TxPhase, TxStatus};

/// Finite-state tracker for one in-flight write operation.
///
/// `idle → pending → (success | error) → idle`. Settled states auto-clear
/// back to idle after a grace period so the view layer can show the outcome
/// before it disappears; the clear is not cancellable by the user, but a new
/// operation starting inside the grace period preempts it and goes straight
/// back to `pending`. Grace timers run on the ambient Tokio runtime.
#[derive(Debug)]
pub struct TransactionTracker {
    tx: Arc<watch::Sender<TxStatus>>,
    generation: Arc<AtomicU64>,
    success_grace: Duration,
    error_grace: Duration,
}

impl TransactionTracker {
    #[must_use]
    pub fn new(success_grace: Duration, error_grace: Duration) -> Self {
        let (tx, _rx) = watch::channel(TxStatus::idle());
        Self {
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            success_grace,
            error_grace,
        }
    }

    /// Current status value.
    #[must_use]
    pub fn current(&self) -> TxStatus {
        self.tx.borrow().clone()
    }

    /// Subscribe to status changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.tx.subscribe()
    }

    /// Enter `pending`; preempts any scheduled clear.
    pub(crate) fn begin(&self, message: impl Into<String>) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.tx.send_replace(TxStatus::pending(message));
    }

    pub(crate) fn succeed(&self, message: impl Into<String>) {
        self.settle(TxStatus::success(message), self.success_grace);
    }

    pub(crate) fn fail(&self, message: impl Into<String>) {
        self.settle(TxStatus::error(message), self.error_grace);
    }

    fn settle(&self, status: TxStatus, grace: Duration) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_replace(status);
        let tx = Arc::clone(&self.tx);
        let counter = Arc::clone(&self.generation);
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            // A newer operation owns the display now; leave it alone.
            if counter.load(Ordering::SeqCst) != generation {
                return;
            }
            tx.send_if_modified(|status| {
                if status.phase == TxPhase::Idle {
                    false
                } else {
                    *status = TxStatus::idle();
                    true
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> TransactionTracker {
        TransactionTracker::new(Duration::from_millis(2_000), Duration::from_millis(3_000))
    }

    async fn let_timers_fire() {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn success_clears_after_its_grace() {
        let t = tracker();
        t.begin("working");
        assert_eq!(t.current().phase, TxPhase::Pending);

        t.succeed("done");
        tokio::task::yield_now().await;
        assert_eq!(t.current().phase, TxPhase::Success);
        assert_eq!(t.current().message, "done");

        tokio::time::advance(Duration::from_millis(1_999)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Success);

        tokio::time::advance(Duration::from_millis(2)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Idle);
        assert!(!t.current().is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn error_holds_longer_than_success() {
        let t = tracker();
        t.begin("working");
        t.fail("boom");
        tokio::task::yield_now().await;
        assert_eq!(t.current().phase, TxPhase::Error);

        tokio::time::advance(Duration::from_millis(2_500)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Error);

        tokio::time::advance(Duration::from_millis(600)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn new_operation_preempts_scheduled_clear() {
        let t = tracker();
        t.begin("first");
        t.succeed("first done");
        tokio::task::yield_now().await;

        // Second operation starts inside the first one's grace period.
        tokio::time::advance(Duration::from_millis(1_000)).await;
        t.begin("second");

        // The first clear would have fired here; it must not touch the
        // second operation's pending display.
        tokio::time::advance(Duration::from_millis(1_500)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Pending);
        assert_eq!(t.current().message, "second");

        t.succeed("second done");
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(2_001)).await;
        let_timers_fire().await;
        assert_eq!(t.current().phase, TxPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_the_full_cycle() {
        let t = tracker();
        let mut rx = t.subscribe();

        t.begin("working");
        rx.changed().await.expect("pending");
        assert_eq!(rx.borrow_and_update().phase, TxPhase::Pending);

        t.succeed("done");
        rx.changed().await.expect("success");
        assert_eq!(rx.borrow_and_update().phase, TxPhase::Success);

        tokio::time::advance(Duration::from_millis(2_001)).await;
        rx.changed().await.expect("idle");
        assert_eq!(rx.borrow_and_update().phase, TxPhase::Idle);
    }
}

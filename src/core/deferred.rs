//! # Deferred Delivery
//!
//! A one-shot message sent into the presentation loop after a fixed delay.
//!
//! The sleep runs on a tokio task, but the task only *sends*; the loop that
//! owns the view applies the message. The returned [`DeferredTask`] is the
//! cancellation handle: calling [`DeferredTask::cancel`] or dropping it aborts
//! the task, so nothing is delivered after the owner goes away.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::AbortHandle;

/// Handle to a pending delayed delivery.
#[derive(Debug)]
pub struct DeferredTask {
    handle: Option<AbortHandle>,
}

impl DeferredTask {
    /// Send `message` on `tx` once `delay` has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<T>(delay: Duration, tx: mpsc::Sender<T>, message: T) -> Self
    where
        T: Send + 'static,
    {
        debug!("Scheduling deferred delivery in {}ms", delay.as_millis());
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(message).is_err() {
                warn!("Deferred delivery dropped: receiver gone");
            }
        });
        Self {
            handle: Some(task.abort_handle()),
        }
    }

    /// Abort the delivery if it has not happened yet. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take()
            && !handle.is_finished()
        {
            info!("Cancelling pending deferred delivery");
            handle.abort();
        }
    }

    /// True until the delivery has run or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::settle;

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (tx, rx) = mpsc::channel();
        let task = DeferredTask::schedule(Duration::from_millis(2000), tx, 7u32);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(task.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        assert_eq!(rx.try_recv().ok(), Some(7));
        assert!(!task.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, rx) = mpsc::channel();
        let mut task = DeferredTask::schedule(Duration::from_millis(2000), tx, 7u32);

        task.cancel();
        assert!(!task.is_pending());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, rx) = mpsc::channel();
        drop(DeferredTask::schedule(Duration::from_millis(10), tx, 7u32));

        tokio::time::sleep(Duration::from_millis(50)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_twice_is_harmless() {
        let (tx, _rx) = mpsc::channel();
        let mut task = DeferredTask::schedule(Duration::from_millis(10), tx, ());
        task.cancel();
        task.cancel();
        assert!(!task.is_pending());
    }
}

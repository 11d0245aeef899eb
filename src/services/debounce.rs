//! Debouncer
//!
//! Collapses bursts of values into a single handler call once no new value
//! has arrived for `delay`. Each push aborts the pending timer and starts a
//! new one; the handler always sees the latest value and runs at most once
//! per burst.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::services::runtime::spawn_named;

type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Timer-reset-on-event debouncer
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    runtime: Handle,
    handler: Handler<T>,
    latest: Arc<Mutex<Option<T>>>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer calling `handler` after `delay` of quiet
    pub fn new(
        delay: Duration,
        runtime: Handle,
        handler: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            delay,
            runtime,
            handler: Arc::new(handler),
            latest: Arc::new(Mutex::new(None)),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a value is waiting for the quiet window to pass
    pub fn is_pending(&self) -> bool {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Record a new value and restart the timer
    pub fn push(&mut self, value: T) {
        self.abort_timer();
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);

        let delay = self.delay;
        let latest = Arc::clone(&self.latest);
        let handler = Arc::clone(&self.handler);
        self.pending = Some(spawn_named(&self.runtime, "debounce", async move {
            tokio::time::sleep(delay).await;
            let value = latest.lock().unwrap_or_else(PoisonError::into_inner).take();
            if let Some(value) = value {
                handler(value);
            }
        }));
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) {
        self.abort_timer();
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    fn abort_timer(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.abort_timer();
    }
}

impl<T: Send + 'static> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{Receiver, unbounded};

    fn recording(delay_ms: u64) -> (Debouncer<u32>, Receiver<u32>) {
        let (tx, rx) = unbounded();
        let debouncer = Debouncer::new(Duration::from_millis(delay_ms), Handle::current(), move |v| {
            let _ = tx.send(v);
        });
        (debouncer, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_latest_value() {
        let (mut debouncer, rx) = recording(150);

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(10)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(10)).await;
        debouncer.push(3);

        tokio::time::sleep(Duration::from_millis(140)).await;
        assert!(rx.try_recv().is_err(), "fired before the quiet window");

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![3]);
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_fire_separately() {
        let (mut debouncer, rx) = recording(100);

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(150)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_value() {
        let (mut debouncer, rx) = recording(100);

        debouncer.push(9);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }
}

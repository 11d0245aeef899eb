//! Page Loader
//!
//! Simulates the latency of fetching one page. A scheduled fetch posts
//! [`CatalogEvent::PageReady`] after the delay; it can be aborted while it
//! sleeps. The slice itself is cut by the state when the event is applied.

use std::time::Duration;

use crossbeam_channel::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::services::events::{CatalogEvent, post};
use crate::services::runtime::spawn_named;
use crate::state::pagination_state::PageRequest;

/// Delayed page fetch scheduler
pub struct PageLoader {
    delay: Duration,
    runtime: Handle,
    tx: Sender<CatalogEvent>,
    in_flight: Option<(PageRequest, JoinHandle<()>)>,
}

impl PageLoader {
    pub fn new(delay: Duration, runtime: Handle, tx: Sender<CatalogEvent>) -> Self {
        Self {
            delay,
            runtime,
            tx,
            in_flight: None,
        }
    }

    /// Schedule the fetch for `request`
    pub fn schedule(&mut self, request: PageRequest) {
        self.cancel();
        tracing::debug!(
            page = request.page_index,
            generation = request.generation,
            "Fetching page"
        );

        let delay = self.delay;
        let tx = self.tx.clone();
        let handle = spawn_named(&self.runtime, "page-fetch", async move {
            tokio::time::sleep(delay).await;
            post(&tx, CatalogEvent::PageReady { request });
        });
        self.in_flight = Some((request, handle));
    }

    /// Abort the fetch in flight, if any
    pub fn cancel(&mut self) {
        if let Some((request, handle)) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!(
                    page = request.page_index,
                    generation = request.generation,
                    "Aborting page fetch"
                );
            }
            handle.abort();
        }
    }

    /// Request of the most recently scheduled fetch
    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight.as_ref().map(|(request, _)| *request)
    }
}

impl Drop for PageLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for PageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLoader")
            .field("delay", &self.delay)
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn request(generation: u64, page_index: usize) -> PageRequest {
        PageRequest {
            generation,
            page_index,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn page_arrives_after_delay() {
        let (tx, rx) = unbounded();
        let mut loader = PageLoader::new(Duration::from_millis(1000), Handle::current(), tx);

        loader.schedule(request(1, 0));
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.try_recv() {
            Ok(CatalogEvent::PageReady { request: got }) => assert_eq!(got, request(1, 0)),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_fetch_never_arrives() {
        let (tx, rx) = unbounded();
        let mut loader = PageLoader::new(Duration::from_millis(100), Handle::current(), tx);

        loader.schedule(request(1, 0));
        loader.cancel();
        assert!(loader.in_flight().is_none());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}

//! Tokio Runtime Bridge
//!
//! Timers (debounce, simulated fetch latency) run as tokio tasks. When the
//! caller is already inside a tokio runtime the task is spawned there, which
//! keeps `#[tokio::test(start_paused = true)]` tests in control of the clock.
//! Otherwise a lazily created shared runtime is used.
//!
//! ## Pattern
//!
//! ```text
//! CatalogController::new
//!       │ runtime_handle()
//!       ▼
//! spawn_named(&handle, "...", async { sleep; tx.send(event) })
//!       │
//!       ▼
//! CatalogEvent picked up by CatalogController::pump()
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

use crate::error::Result;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Runtime::new()?;
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Handle of the ambient runtime, or of the shared one
pub fn runtime_handle() -> Result<Handle> {
    match Handle::try_current() {
        Ok(handle) => Ok(handle),
        Err(_) => Ok(get_runtime()?.handle().clone()),
    }
}

/// Spawn a task with a name (for debugging); abort it through the returned handle
pub fn spawn_named<F>(handle: &Handle, name: &'static str, future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::trace!("Spawning tokio task: {}", name);
    handle.spawn(async move {
        future.await;
        tracing::trace!("Tokio task completed: {}", name);
    })
}

/// Block on a future on the shared runtime (binary entry point only)
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn handle_outside_runtime_uses_shared_runtime() {
        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        let handle = runtime_handle().expect("shared runtime");
        spawn_named(&handle, "flag", async move {
            flag_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn handle_inside_runtime_uses_current_runtime() {
        let handle = runtime_handle().expect("current runtime");
        let joined = spawn_named(&handle, "noop", async {}).await;
        assert!(joined.is_ok());
    }

    #[test]
    fn block_on_returns_the_output() {
        assert_eq!(block_on(async { 21 * 2 }).expect("block_on"), 42);
    }
}

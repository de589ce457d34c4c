use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use hedge_core::model::{SessionToken, TickOutcome};

use crate::error::HedgeError;
use crate::shell::HedgeShell;

/// Shell shared between a headless driver and its ticker task.
pub type SharedShell = Arc<Mutex<HedgeShell>>;

/// Sleeps one `interval`, delivers a tick, and repeats until a tick
/// completes the session or turns out to be stale.
///
/// Shared by [`TickHandle`] and by drivers whose state cannot cross threads.
pub async fn tick_until_settled<F, Fut>(interval: Duration, mut tick: F) -> TickOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = TickOutcome>,
{
    loop {
        tokio::time::sleep(interval).await;
        let outcome = tick().await;
        if !outcome.keeps_running() {
            return outcome;
        }
    }
}

/// Owns the background task that animates one session.
///
/// Dropping the handle cancels the task, so a ticker never outlives the code
/// that started it.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<TickOutcome>,
}

impl TickHandle {
    /// Starts ticking the session `token` belongs to.
    #[must_use]
    pub fn spawn(shell: SharedShell, token: SessionToken) -> Self {
        let task = tokio::spawn(async move {
            let interval = shell.lock().await.schedule().interval();
            tick_until_settled(interval, || {
                let shell = Arc::clone(&shell);
                async move { shell.lock().await.tick(token) }
            })
            .await
        });
        Self { task }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the ticker. Idempotent.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Waits for the ticker to stop and reports how it ended.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::TickerCancelled` if the task was aborted and
    /// `HedgeError::TickerFailed` if it panicked.
    pub async fn finished(mut self) -> Result<TickOutcome, HedgeError> {
        let result = (&mut self.task).await;
        result.map_err(|err| {
            if err.is_cancelled() {
                HedgeError::TickerCancelled
            } else {
                HedgeError::TickerFailed(err.to_string())
            }
        })
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

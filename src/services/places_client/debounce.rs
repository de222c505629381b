use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Single-slot scheduler collapsing a burst of query intents into one
/// dispatch. Each `schedule` call aborts the pending slot and arms a new
/// timer, so only the most recent call's arguments ever fire; superseded
/// work is discarded before it runs, never queued.
pub struct QueryDebouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    pub fn new(window: Duration) -> Self {
        QueryDebouncer {
            window,
            pending: None,
        }
    }

    /// Arms `work` to run after the quiescence window, cancelling whatever
    /// was pending. Arguments must already be captured inside the future.
    pub fn schedule(&mut self, work: BoxFuture<'static, ()>) {
        self.cancel_pending();

        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            work.await;
        }));
    }

    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        QueryDebouncer::new(DEFAULT_QUIESCENCE)
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Monotonic request tags for callers displaying results. In-flight calls
/// cannot be aborted; a stale response is ignored on arrival by checking
/// its sequence number against the highest already accepted.
#[derive(Debug, Default)]
pub struct ResponseSequencer {
    issued: u64,
    accepted: u64,
}

impl ResponseSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns whether a response carrying `seq` may be displayed.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.accepted {
            self.accepted = seq;
            true
        } else {
            false
        }
    }
}

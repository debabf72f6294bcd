//! Simulated redirect
//!
//! A resolved entry is shown for a fixed delay, then the navigator is sent to
//! the original URL. The returned [`RedirectHandle`] scopes the pending timer:
//! cancelling or dropping it guarantees no navigation happens.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::storage::Entry;

/// 默认跳转延迟
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Where the browsing context is sent once the delay elapses.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    Idle,
    Pending(Entry),
    Completed,
}

#[derive(Debug, Clone)]
pub struct RedirectSimulator {
    delay: Duration,
}

impl Default for RedirectSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_DELAY)
    }
}

impl RedirectSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Enters `Pending(entry)` immediately. Must be called inside a tokio runtime.
    pub fn start(&self, entry: Entry, navigator: Arc<dyn Navigator>) -> RedirectHandle {
        let deadline = Instant::now() + self.delay;
        let state = Arc::new(Mutex::new(RedirectState::Pending(entry)));

        let task_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            sleep_until(deadline).await;

            // Claim the entry under the lock; navigate after releasing it so
            // the navigator may query the handle.
            let entry = {
                let mut state = task_state.lock();
                match std::mem::replace(&mut *state, RedirectState::Completed) {
                    RedirectState::Pending(entry) => entry,
                    other => {
                        *state = other;
                        return;
                    }
                }
            };

            info!("Redirecting to {}", entry.original_url);
            navigator.navigate(&entry.original_url);
        });

        debug!("Redirect scheduled in {:?}", self.delay);

        RedirectHandle {
            state,
            deadline,
            task: Some(task),
        }
    }
}

pub struct RedirectHandle {
    state: Arc<Mutex<RedirectState>>,
    deadline: Instant,
    task: Option<JoinHandle<()>>,
}

impl RedirectHandle {
    pub fn state(&self) -> RedirectState {
        self.state.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.state.lock(), RedirectState::Pending(_))
    }

    /// Time left before navigation, zero once no longer pending.
    pub fn remaining(&self) -> Duration {
        if self.is_pending() {
            self.deadline.saturating_duration_since(Instant::now())
        } else {
            Duration::ZERO
        }
    }

    /// Whole seconds left, rounded up, for countdown display.
    pub fn countdown_secs(&self) -> u64 {
        let remaining = self.remaining();
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    /// Returns `true` if a pending redirect was stopped.
    pub fn cancel(&mut self) -> bool {
        let cancelled = {
            let mut state = self.state.lock();
            if matches!(*state, RedirectState::Pending(_)) {
                *state = RedirectState::Idle;
                true
            } else {
                false
            }
        };

        if let Some(task) = self.task.take() {
            task.abort();
        }

        if cancelled {
            debug!("Pending redirect cancelled");
        }
        cancelled
    }

    /// Waits until the redirect completes or is cancelled.
    pub async fn wait(&mut self) -> RedirectState {
        if let Some(task) = self.task.as_mut() {
            let _ = task.await;
            self.task = None;
        }
        self.state()
    }
}

impl Drop for RedirectHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tokio::time::sleep;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visits.lock().push(url.to_string());
        }
    }

    fn entry() -> Entry {
        Entry::new(
            1,
            "https://example.com/page",
            "http://localhost:8080/abc123",
            Utc::now(),
            None,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigates_after_delay() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut handle = RedirectSimulator::default().start(entry(), navigator.clone());

        assert!(handle.is_pending());
        assert_eq!(handle.countdown_secs(), 2);

        sleep(Duration::from_millis(1999)).await;
        assert!(navigator.visits.lock().is_empty());
        assert!(handle.is_pending());

        assert_eq!(handle.wait().await, RedirectState::Completed);
        assert_eq!(*navigator.visits.lock(), vec!["https://example.com/page"]);
        assert_eq!(handle.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_navigation() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut handle = RedirectSimulator::default().start(entry(), navigator.clone());

        sleep(Duration::from_millis(1000)).await;
        assert!(handle.cancel());
        assert!(!handle.cancel());

        sleep(Duration::from_secs(5)).await;
        assert!(navigator.visits.lock().is_empty());
        assert_eq!(handle.state(), RedirectState::Idle);
        assert_eq!(handle.wait().await, RedirectState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let navigator = Arc::new(RecordingNavigator::default());
        {
            let _handle = RedirectSimulator::default().start(entry(), navigator.clone());
            sleep(Duration::from_millis(500)).await;
        }
        sleep(Duration::from_secs(5)).await;
        assert!(navigator.visits.lock().is_empty());
    }

    /// Reads the redirect state from inside `navigate`.
    #[derive(Default)]
    struct StateReadingNavigator {
        state: std::sync::OnceLock<Arc<Mutex<RedirectState>>>,
        seen: Mutex<Option<RedirectState>>,
    }

    impl Navigator for StateReadingNavigator {
        fn navigate(&self, _url: &str) {
            if let Some(state) = self.state.get() {
                *self.seen.lock() = Some(state.lock().clone());
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigator_can_read_state() {
        let navigator = Arc::new(StateReadingNavigator::default());
        let mut handle = RedirectSimulator::default().start(entry(), navigator.clone());
        let _ = navigator.state.set(Arc::clone(&handle.state));

        assert_eq!(handle.wait().await, RedirectState::Completed);
        assert_eq!(*navigator.seen.lock(), Some(RedirectState::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_is_noop() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut handle =
            RedirectSimulator::new(Duration::from_millis(10)).start(entry(), navigator.clone());
        handle.wait().await;
        assert!(!handle.cancel());
        assert_eq!(handle.state(), RedirectState::Completed);
        assert_eq!(navigator.visits.lock().len(), 1);
    }
}

//! Real-time scheduler on a tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

use super::scheduler::{Scheduler, Task, TimerHandle};
use crate::error::{Result, UnderbarError};

/// Runs tasks on a tokio runtime after a real-time delay.
///
/// Each scheduled task becomes a spawned tokio task that sleeps with
/// [`tokio::time::sleep`]. The runtime must have the time driver enabled.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
/// use underbar::function::{TokioScheduler, delay};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let scheduler = TokioScheduler::current().unwrap();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// delay(&scheduler, Duration::from_millis(5), move |()| flag.store(true, Ordering::SeqCst), ());
/// tokio::time::sleep(Duration::from_millis(50)).await;
/// assert!(fired.load(Ordering::SeqCst));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto `handle`.
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::SchedulerUnavailable`] when called outside a
    /// tokio runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|error| UnderbarError::SchedulerUnavailable(error.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, task: Task) -> TimerHandle {
        let timer = TimerHandle::new();
        let guard = timer.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(after).await;
            if guard.is_cancelled() {
                tracing::trace!("skipping cancelled task");
            } else {
                task();
            }
        });
        timer
    }
}

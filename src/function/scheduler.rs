//! Timer capability used by [`delay`](super::delay) and
//! [`Throttle`](super::Throttle).
//!
//! A [`Scheduler`] runs a [`Task`] once, no earlier than a requested
//! duration, and hands back a [`TimerHandle`] that can cancel it. Two
//! implementations ship with the crate:
//!
//! - [`ManualScheduler`]: virtual time, advanced explicitly by the caller
//! - `TokioScheduler` (feature `async`): real time on a tokio runtime

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Cancellation handle for a scheduled task.
///
/// Clones share the same flag. Cancelling after the task has started has no
/// effect.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Creates a handle that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevents the task from running if it has not started yet.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Port for running work after a delay.
///
/// Implementations must return from [`schedule`](Self::schedule) without
/// running the task, and must check [`TimerHandle::is_cancelled`] right
/// before running it. A task may also be dropped without running, for
/// example when the underlying runtime shuts down.
pub trait Scheduler {
    /// Schedules `task` to run once, no earlier than `after` from now.
    fn schedule(&self, after: Duration, task: Task) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, after: Duration, task: Task) -> TimerHandle {
        (**self).schedule(after, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, after: Duration, task: Task) -> TimerHandle {
        (**self).schedule(after, task)
    }
}

struct Pending {
    timer: TimerHandle,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    sequence: u64,
    queue: BTreeMap<(Duration, u64), Pending>,
}

/// A scheduler driven by virtual time.
///
/// Nothing runs until [`advance`](Self::advance) or
/// [`run_until_idle`](Self::run_until_idle) is called. Due tasks run in
/// deadline order, ties in the order they were scheduled. A running task may
/// schedule further tasks; those run in the same `advance` call if they fall
/// due within it.
///
/// Deadlines past `Duration::MAX` are clamped to it.
///
/// Clones share the same clock and queue.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use underbar::function::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// scheduler.schedule(
///     Duration::from_millis(100),
///     Box::new(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     }),
/// );
///
/// scheduler.advance(Duration::from_millis(99));
/// assert_eq!(runs.load(Ordering::SeqCst), 0);
///
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of tasks waiting to run, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `duration`, running every task that falls
    /// due on the way.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&self, duration: Duration) {
        let target = self.now().saturating_add(duration);
        self.run_due(target);
        let mut state = self.state.lock();
        state.now = state.now.max(target);
    }

    /// Runs tasks until the queue is empty, moving the clock to each
    /// deadline in turn.
    pub fn run_until_idle(&self) {
        loop {
            let next_deadline = self
                .state
                .lock()
                .queue
                .keys()
                .next()
                .map(|(deadline, _)| *deadline);
            match next_deadline {
                Some(deadline) => self.run_due(deadline),
                None => break,
            }
        }
    }

    fn run_due(&self, target: Duration) {
        loop {
            let next = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .keys()
                    .next()
                    .map(|(deadline, _)| *deadline)
                    .filter(|deadline| *deadline <= target);
                due.and_then(|deadline| {
                    state.now = state.now.max(deadline);
                    state.queue.pop_first().map(|(_, pending)| pending)
                })
            };
            let Some(pending) = next else { break };
            if pending.timer.is_cancelled() {
                tracing::trace!("skipping cancelled task");
                continue;
            }
            tracing::trace!(now = ?self.now(), "running scheduled task");
            (pending.task)();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, task: Task) -> TimerHandle {
        let timer = TimerHandle::new();
        let mut state = self.state.lock();
        let deadline = state.now.saturating_add(after);
        let sequence = state.sequence;
        state.sequence += 1;
        state.queue.insert(
            (deadline, sequence),
            Pending {
                timer: timer.clone(),
                task,
            },
        );
        timer
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

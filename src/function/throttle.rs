//! Rate-limited, delayed invocation.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::{Scheduler, TimerHandle};

/// How a [`Throttle`] decides whether a call schedules an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrottlePolicy {
    /// At most one invocation pending at a time.
    ///
    /// A call schedules an invocation `wait` later unless one is already
    /// pending, in which case the call is dropped. Once the pending
    /// invocation has run, been cancelled, or been discarded by the
    /// scheduler, the next call schedules again.
    #[default]
    Window,
    /// Every call schedules an invocation until `max_scheduled` have been
    /// scheduled; from then on calls do nothing.
    Capped {
        /// The number of invocations the throttle will ever schedule.
        max_scheduled: usize,
    },
}

impl ThrottlePolicy {
    /// The two-call cap of the classic underbar `throttle`.
    pub const fn legacy() -> Self {
        Self::Capped { max_scheduled: 2 }
    }
}

#[derive(Debug, Default)]
struct Window {
    generation: u64,
    pending: Option<TimerHandle>,
}

/// Frees the window of one generation when dropped.
///
/// Moved into the scheduled task, so the window reopens whether the task
/// runs or the scheduler discards it.
struct WindowRelease {
    window: Arc<Mutex<Window>>,
    generation: u64,
}

impl Drop for WindowRelease {
    fn drop(&mut self) {
        let mut window = self.window.lock();
        if window.generation == self.generation {
            window.pending = None;
        }
    }
}

/// A function whose calls are turned into delayed, rate-limited invocations.
///
/// Each invocation receives the arguments of the call that scheduled it.
///
/// Created by [`throttle`] or [`Throttle::with_policy`].
pub struct Throttle<A, F, S> {
    function: Arc<F>,
    scheduler: S,
    wait: Duration,
    policy: ThrottlePolicy,
    window: Arc<Mutex<Window>>,
    scheduled: AtomicUsize,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that calls run it at most once per `wait` window.
///
/// Uses [`ThrottlePolicy::Window`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use underbar::function::{ManualScheduler, throttle};
///
/// let scheduler = ManualScheduler::new();
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let save = throttle(scheduler.clone(), Duration::from_millis(100), move |()| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// for _ in 0..10 {
///     save.call(());
/// }
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
///
/// save.call(());
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(runs.load(Ordering::SeqCst), 2);
/// ```
pub fn throttle<A, F, S>(scheduler: S, wait: Duration, function: F) -> Throttle<A, F, S>
where
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    Throttle::with_policy(scheduler, wait, ThrottlePolicy::Window, function)
}

impl<A, F, S> Throttle<A, F, S>
where
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    /// Wraps `function` with an explicit [`ThrottlePolicy`].
    pub fn with_policy(scheduler: S, wait: Duration, policy: ThrottlePolicy, function: F) -> Self {
        Self {
            function: Arc::new(function),
            scheduler,
            wait,
            policy,
            window: Arc::new(Mutex::new(Window::default())),
            scheduled: AtomicUsize::new(0),
            _arguments: PhantomData,
        }
    }

    /// Schedules an invocation with `args` if the policy allows it.
    ///
    /// Returns the handle of the scheduled invocation, or `None` if the call
    /// was dropped.
    pub fn call(&self, args: A) -> Option<TimerHandle>
    where
        A: Send + 'static,
    {
        match self.policy {
            ThrottlePolicy::Window => self.call_windowed(args),
            ThrottlePolicy::Capped { max_scheduled } => self.call_capped(args, max_scheduled),
        }
    }

    /// Returns the number of invocations scheduled so far.
    pub fn scheduled(&self) -> usize {
        self.scheduled.load(Ordering::Acquire)
    }

    /// Returns the policy this throttle was built with.
    pub const fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    fn call_windowed(&self, args: A) -> Option<TimerHandle>
    where
        A: Send + 'static,
    {
        let generation = {
            let mut window = self.window.lock();
            if window
                .pending
                .as_ref()
                .is_some_and(|timer| !timer.is_cancelled())
            {
                tracing::debug!("throttled call dropped, invocation already pending");
                return None;
            }
            window.generation += 1;
            // Holds the window until the real handle is known.
            window.pending = Some(TimerHandle::new());
            window.generation
        };
        let release = WindowRelease {
            window: Arc::clone(&self.window),
            generation,
        };
        let function = Arc::clone(&self.function);
        tracing::trace!(wait = ?self.wait, generation, "scheduling throttled call");
        // Scheduled without the lock held: a scheduler may drop the task,
        // and with it the release guard, before returning.
        let timer = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                drop(release);
                (*function)(args);
            }),
        );
        {
            let mut window = self.window.lock();
            if window.generation == generation && window.pending.is_some() {
                window.pending = Some(timer.clone());
            }
        }
        self.scheduled.fetch_add(1, Ordering::AcqRel);
        Some(timer)
    }

    fn call_capped(&self, args: A, max_scheduled: usize) -> Option<TimerHandle>
    where
        A: Send + 'static,
    {
        let reserved = self
            .scheduled
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count < max_scheduled).then_some(count + 1)
            });
        if reserved.is_err() {
            tracing::debug!(max_scheduled, "throttle cap reached, call ignored");
            return None;
        }
        let function = Arc::clone(&self.function);
        tracing::trace!(wait = ?self.wait, "scheduling capped throttled call");
        Some(
            self.scheduler
                .schedule(self.wait, Box::new(move || (*function)(args))),
        )
    }
}

impl<A, F, S: fmt::Debug> fmt::Debug for Throttle<A, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("scheduler", &self.scheduler)
            .field("wait", &self.wait)
            .field("policy", &self.policy)
            .field("scheduled", &self.scheduled.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

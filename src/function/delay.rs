//! Deferred invocation.

use std::time::Duration;

use super::scheduler::{Scheduler, TimerHandle};

/// Calls `function(args)` once, no earlier than `wait` from now.
///
/// Returns immediately. The returned handle cancels the call if it has not
/// started yet.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::time::Duration;
/// use underbar::function::{ManualScheduler, delay};
///
/// let scheduler = ManualScheduler::new();
/// let total = Arc::new(AtomicI32::new(0));
/// let target = Arc::clone(&total);
///
/// delay(
///     &scheduler,
///     Duration::from_millis(500),
///     move |(left, right): (i32, i32)| {
///         target.store(left + right, Ordering::SeqCst);
///     },
///     (2, 3),
/// );
///
/// assert_eq!(total.load(Ordering::SeqCst), 0);
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(total.load(Ordering::SeqCst), 5);
/// ```
pub fn delay<S, A, F>(scheduler: &S, wait: Duration, function: F, args: A) -> TimerHandle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    tracing::trace!(?wait, "scheduling delayed call");
    scheduler.schedule(wait, Box::new(move || function(args)))
}

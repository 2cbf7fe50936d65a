//! One-shot invocation.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A function that runs at most once.
///
/// The first [`call`](Self::call) runs the wrapped function with its
/// arguments and stores the result; every later call returns a clone of that
/// result and ignores its own arguments.
///
/// Concurrent first calls block until the winning call has produced the
/// result. Calling the same `Once` from inside its own function deadlocks.
///
/// Created by [`once`].
pub struct Once<A, R, F> {
    function: Mutex<Option<F>>,
    result: OnceLock<R>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs at most once.
///
/// Multiple arguments are passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::once;
///
/// let runs = Cell::new(0);
/// let initialize = once(|(left, right): (i32, i32)| {
///     runs.set(runs.get() + 1);
///     left + right
/// });
///
/// assert_eq!(initialize.call((1, 2)), 3);
/// assert_eq!(initialize.call((10, 20)), 3);
/// assert_eq!(runs.get(), 1);
/// ```
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once {
        function: Mutex::new(Some(function)),
        result: OnceLock::new(),
        _arguments: PhantomData,
    }
}

impl<A, R, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    /// Runs the function on the first call and returns the cached result.
    ///
    /// # Panics
    ///
    /// If the wrapped function panicked on an earlier call, the wrapper is
    /// poisoned and every later call panics.
    pub fn call(&self, args: A) -> R
    where
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                let function = self.function.lock().take();
                match function {
                    Some(function) => {
                        tracing::trace!("running once-wrapped function");
                        function(args)
                    }
                    None => panic!("Once instance has been poisoned"),
                }
            })
            .clone()
    }

    /// Returns the cached result, or `None` before the first call.
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    /// Returns whether the function has already produced its result.
    pub fn is_called(&self) -> bool {
        self.result.get().is_some()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Once")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}

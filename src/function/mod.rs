//! Function decorators.
//!
//! Each decorator takes a function and returns a struct that owns the
//! decoration state and exposes a `call` method:
//!
//! - [`Once`]: runs the function at most once, caching the result
//! - [`Memoize`]: caches results per serialized argument list
//! - [`Throttle`]: turns calls into delayed, rate-limited invocations
//!
//! plus [`delay`], which schedules a single deferred call.
//!
//! Multiple arguments are passed as a tuple, so a two-argument function is
//! written `|(left, right): (i32, i32)| ...`.
//!
//! State is guarded with locks and atomics, so decorated functions can be
//! shared across threads whenever the wrapped function allows it.
//!
//! # Scheduling
//!
//! [`delay`] and [`Throttle`] do not own a timer. They take a [`Scheduler`]:
//! [`ManualScheduler`] for virtual time, or `TokioScheduler` (feature
//! `async`) for real time.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::{memoize, once};
//!
//! let connects = Cell::new(0);
//! let connect = once(|address: &str| {
//!     connects.set(connects.get() + 1);
//!     format!("connected to {address}")
//! });
//! assert_eq!(connect.call("db-1"), "connected to db-1");
//! assert_eq!(connect.call("db-2"), "connected to db-1");
//! assert_eq!(connects.get(), 1);
//!
//! let fibonacci = memoize(|n: u64| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci.call(50).unwrap(), 12_586_269_025);
//! ```

mod delay;
mod memoize;
mod once;
mod scheduler;
mod throttle;
#[cfg(feature = "async")]
mod tokio_scheduler;

pub use delay::delay;
pub use memoize::{JsonKey, KeySerializer, Memoize, memoize};
pub use once::{Once, once};
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerHandle};
pub use throttle::{Throttle, ThrottlePolicy, throttle};
#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;

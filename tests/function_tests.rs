//! Integration tests for the function decorators.
//!
//! Timing is driven by `ManualScheduler`, so every test runs in virtual time.

#![cfg(feature = "function")]

use rstest::{fixture, rstest};
use serde::Serialize;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use underbar::UnderbarError;
use underbar::function::{
    KeySerializer, ManualScheduler, Scheduler, Task, Throttle, ThrottlePolicy, TimerHandle, delay,
    memoize, once, throttle,
};

#[fixture]
fn scheduler() -> ManualScheduler {
    ManualScheduler::new()
}

fn log() -> Arc<Mutex<Vec<i32>>> {
    Arc::new(Mutex::new(Vec::new()))
}

// =============================================================================
// once
// =============================================================================

#[rstest]
fn once_runs_function_on_first_call_only() {
    let runs = Cell::new(0);
    let initialize = once(|value: i32| {
        runs.set(runs.get() + 1);
        value * 10
    });

    let results: Vec<i32> = (1..=5).map(|value| initialize.call(value)).collect();

    assert_eq!(results, vec![10, 10, 10, 10, 10]);
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn once_reports_whether_it_has_run() {
    let greet = once(|name: String| format!("hello {name}"));
    assert!(!greet.is_called());
    assert_eq!(greet.get(), None);

    greet.call("world".to_string());

    assert!(greet.is_called());
    assert_eq!(greet.get().map(String::as_str), Some("hello world"));
}

#[rstest]
fn once_accepts_move_only_functions() {
    let resource = vec![1, 2, 3];
    let consume = once(move |()| resource.into_iter().sum::<i32>());
    assert_eq!(consume.call(()), 6);
    assert_eq!(consume.call(()), 6);
}

#[rstest]
fn once_is_poisoned_after_panic() {
    let explode = once(|_: ()| -> i32 { panic!("boom") });

    let first = catch_unwind(AssertUnwindSafe(|| explode.call(())));
    let second = catch_unwind(AssertUnwindSafe(|| explode.call(())));

    assert!(first.is_err());
    let message = second.unwrap_err();
    assert_eq!(
        message.downcast_ref::<&str>().copied(),
        Some("Once instance has been poisoned")
    );
}

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn memoize_runs_once_per_distinct_argument_list() {
    let runs = Cell::new(0);
    let add = memoize(|(left, right): (i32, i32)| {
        runs.set(runs.get() + 1);
        left + right
    });

    assert_eq!(add.call((1, 2)).unwrap(), 3);
    assert_eq!(add.call((1, 2)).unwrap(), 3);
    assert_eq!(add.call((3, 4)).unwrap(), 7);

    assert_eq!(runs.get(), 2);
    assert_eq!(add.len(), 2);
}

#[rstest]
fn memoize_keys_on_structure_not_identity() {
    #[derive(Serialize)]
    struct Query {
        table: String,
        limit: u32,
    }

    let runs = Cell::new(0);
    let describe = memoize(|query: Query| {
        runs.set(runs.get() + 1);
        format!("{}:{}", query.table, query.limit)
    });

    let first = Query {
        table: "users".to_string(),
        limit: 10,
    };
    let second = Query {
        table: "users".to_string(),
        limit: 10,
    };

    assert_eq!(describe.call(first).unwrap(), "users:10");
    assert_eq!(describe.call(second).unwrap(), "users:10");
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn memoize_distinguishes_argument_order() {
    let runs = Cell::new(0);
    let subtract = memoize(|(left, right): (i32, i32)| {
        runs.set(runs.get() + 1);
        left - right
    });
    assert_eq!(subtract.call((5, 3)).unwrap(), 2);
    assert_eq!(subtract.call((3, 5)).unwrap(), -2);
    assert_eq!(runs.get(), 2);
}

#[rstest]
fn memoize_with_custom_serializer() {
    struct CaseInsensitive;

    impl KeySerializer for CaseInsensitive {
        fn key<A: Serialize + ?Sized>(&self, arguments: &A) -> underbar::Result<String> {
            Ok(serde_json::to_string(arguments)?.to_lowercase())
        }
    }

    let runs = Cell::new(0);
    let lookup = underbar::function::Memoize::with_serializer(
        |name: String| {
            runs.set(runs.get() + 1);
            name.len()
        },
        CaseInsensitive,
    );

    assert_eq!(lookup.call("Alice".to_string()).unwrap(), 5);
    assert_eq!(lookup.call("ALICE".to_string()).unwrap(), 5);
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn memoize_reports_unserializable_arguments() {
    let count = memoize(|values: std::collections::HashMap<(i32, i32), i32>| values.len());
    let error = count
        .call(std::collections::HashMap::from([((1, 2), 3)]))
        .unwrap_err();
    assert!(matches!(error, UnderbarError::Unserializable(_)));
    assert!(error.to_string().starts_with("memoize:"));
}

// =============================================================================
// delay
// =============================================================================

#[rstest]
fn delay_runs_after_wait_with_arguments(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);

    delay(
        &scheduler,
        Duration::from_millis(100),
        move |(left, right): (i32, i32)| target.lock().unwrap().push(left * right),
        (6, 7),
    );

    scheduler.advance(Duration::from_millis(99));
    assert!(calls.lock().unwrap().is_empty());

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(*calls.lock().unwrap(), vec![42]);
}

#[rstest]
fn delay_can_be_cancelled(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);

    let timer = delay(
        &scheduler,
        Duration::from_millis(10),
        move |value: i32| target.lock().unwrap().push(value),
        1,
    );
    timer.cancel();
    scheduler.run_until_idle();

    assert!(calls.lock().unwrap().is_empty());
}

#[rstest]
fn delay_with_zero_wait_still_defers(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);

    delay(
        &scheduler,
        Duration::ZERO,
        move |value: i32| target.lock().unwrap().push(value),
        5,
    );

    assert!(calls.lock().unwrap().is_empty());
    scheduler.advance(Duration::ZERO);
    assert_eq!(*calls.lock().unwrap(), vec![5]);
}

#[rstest]
fn delayed_calls_run_in_deadline_order(scheduler: ManualScheduler) {
    let calls = log();
    for (wait, value) in [(30, 3), (10, 1), (20, 2)] {
        let target = Arc::clone(&calls);
        delay(
            &scheduler,
            Duration::from_millis(wait),
            move |value: i32| target.lock().unwrap().push(value),
            value,
        );
    }
    scheduler.run_until_idle();
    assert_eq!(*calls.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(scheduler.now(), Duration::from_millis(30));
}

// =============================================================================
// throttle
// =============================================================================

#[rstest]
fn throttle_coalesces_calls_within_window(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);
    let throttled = throttle(
        scheduler.clone(),
        Duration::from_millis(100),
        move |value: i32| target.lock().unwrap().push(value),
    );

    assert!(throttled.call(1).is_some());
    assert!(throttled.call(2).is_none());
    assert!(throttled.call(3).is_none());

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(*calls.lock().unwrap(), vec![1]);

    assert!(throttled.call(4).is_some());
    scheduler.advance(Duration::from_millis(100));
    assert_eq!(*calls.lock().unwrap(), vec![1, 4]);
    assert_eq!(throttled.scheduled(), 2);
}

#[rstest]
fn throttle_never_runs_before_wait(scheduler: ManualScheduler) {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let throttled = throttle(scheduler.clone(), Duration::from_millis(50), move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    throttled.call(());
    scheduler.advance(Duration::from_millis(49));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    scheduler.advance(Duration::from_millis(1));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
fn throttle_legacy_policy_schedules_two_invocations_ever(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);
    let throttled = Throttle::with_policy(
        scheduler.clone(),
        Duration::from_millis(10),
        ThrottlePolicy::legacy(),
        move |value: i32| target.lock().unwrap().push(value),
    );

    for value in 1..=5 {
        throttled.call(value);
    }
    scheduler.run_until_idle();
    for value in 6..=8 {
        throttled.call(value);
    }
    scheduler.run_until_idle();

    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    assert_eq!(throttled.scheduled(), 2);
}

#[rstest]
#[case(1, vec![1])]
#[case(3, vec![1, 2, 3])]
#[case(10, vec![1, 2, 3, 4])]
fn throttle_capped_policy_respects_limit(
    scheduler: ManualScheduler,
    #[case] max_scheduled: usize,
    #[case] expected: Vec<i32>,
) {
    let calls = log();
    let target = Arc::clone(&calls);
    let throttled = Throttle::with_policy(
        scheduler.clone(),
        Duration::from_millis(10),
        ThrottlePolicy::Capped { max_scheduled },
        move |value: i32| target.lock().unwrap().push(value),
    );

    for value in 1..=4 {
        throttled.call(value);
    }
    scheduler.run_until_idle();

    assert_eq!(*calls.lock().unwrap(), expected);
}

/// Holds tasks until told to discard them, never running any.
#[derive(Default)]
struct Discarding {
    tasks: Mutex<Vec<Task>>,
}

impl Scheduler for Discarding {
    fn schedule(&self, _after: Duration, task: Task) -> TimerHandle {
        self.tasks.lock().unwrap().push(task);
        TimerHandle::new()
    }
}

#[rstest]
fn throttle_window_reopens_after_scheduler_discards_pending_task() {
    let scheduler = Arc::new(Discarding::default());
    let throttled = throttle(Arc::clone(&scheduler), Duration::from_millis(10), |_: i32| {});

    assert!(throttled.call(1).is_some());
    assert!(throttled.call(2).is_none());

    scheduler.tasks.lock().unwrap().clear();

    assert!(throttled.call(3).is_some());
    assert_eq!(throttled.scheduled(), 2);
}

#[rstest]
fn delay_with_duration_max_on_advanced_scheduler_does_not_run(scheduler: ManualScheduler) {
    let calls = log();
    let target = Arc::clone(&calls);
    scheduler.advance(Duration::from_secs(1));

    assert!(
        !delay(
            &scheduler,
            Duration::MAX,
            move |value: i32| target.lock().unwrap().push(value),
            1,
        )
        .is_cancelled()
    );
    scheduler.advance(Duration::from_secs(86_400));

    assert!(calls.lock().unwrap().is_empty());
}

#[rstest]
fn memoize_does_not_count_panicked_calls() {
    let parse = memoize(|text: String| text.parse::<i32>().expect("numeric input"));

    let outcome = catch_unwind(AssertUnwindSafe(|| parse.call("x".to_string())));

    assert!(outcome.is_err());
    assert!(parse.is_empty());
    assert_eq!(parse.call("12".to_string()).unwrap(), 12);
    assert_eq!(parse.len(), 1);
}

#[rstest]
fn throttle_reports_its_policy(scheduler: ManualScheduler) {
    let throttled = throttle(scheduler, Duration::from_millis(1), |_: ()| {});
    assert_eq!(throttled.policy(), ThrottlePolicy::Window);
}

// =============================================================================
// TokioScheduler
// =============================================================================

#[cfg(feature = "async")]
mod tokio_scheduler {
    use super::*;
    use underbar::function::TokioScheduler;

    #[tokio::test(start_paused = true)]
    async fn delay_on_tokio_runs_after_wait() {
        let scheduler = TokioScheduler::current().unwrap();
        let calls = log();
        let target = Arc::clone(&calls);

        delay(
            &scheduler,
            Duration::from_millis(200),
            move |value: i32| target.lock().unwrap().push(value),
            9,
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(calls.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*calls.lock().unwrap(), vec![9]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_delay_on_tokio_never_runs() {
        let scheduler = TokioScheduler::current().unwrap();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let timer = delay(
            &scheduler,
            Duration::from_millis(50),
            move |()| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            (),
        );
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn throttle_on_tokio_coalesces_calls() {
        let scheduler = TokioScheduler::current().unwrap();
        let calls = log();
        let target = Arc::clone(&calls);
        let throttled = throttle(scheduler, Duration::from_millis(100), move |value: i32| {
            target.lock().unwrap().push(value);
        });

        for value in 1..=3 {
            throttled.call(value);
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
        throttled.call(4);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(*calls.lock().unwrap(), vec![1, 4]);
    }
}

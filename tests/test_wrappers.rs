//! Stacking tests.
//!
//! The wrappers share nothing, so any of them can wrap another.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use wrapkit::memoize::{memoize, memoize_ok};
use wrapkit::retry::{wrap, RetryPolicy};
use wrapkit::telemetry::Logged;
use wrapkit::timing::timed_named;

fn no_delay(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::ZERO).unwrap()
}

#[test]
fn test_memoized_retry_only_retries_once_per_key() {
    let calls = AtomicU32::new(0);
    let flaky = wrap(
        |x: u32| {
            if calls.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                Err("flaky")
            } else {
                Ok(x * 3)
            }
        },
        no_delay(2),
    );
    let cached = memoize_ok(flaky);

    assert_eq!(cached.try_call(4), Ok(12));
    assert_eq!(cached.try_call(4), Ok(12));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_retry_around_timed() {
    let calls = AtomicU32::new(0);
    let timed = timed_named("step", |_: ()| {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err("first")
        } else {
            Ok("done")
        }
    });

    let mut reports = Vec::new();
    let mut attempt = || timed.call_reporting((), &mut reports);
    let result = wrapkit::retry::retry(&no_delay(3), &mut attempt);

    assert_eq!(result, Ok("done"));
    let text = String::from_utf8(reports).unwrap();
    // One timing line per attempt
    assert_eq!(text.matches("Function step took").count(), 2);
}

#[test]
fn test_logged_memoized_value_is_unchanged() {
    let square = memoize(|x: i64| x * x);
    let logged = Logged::new("square", |x: i64| square.call(x));

    assert_eq!(logged.call(-7), 49);
    assert_eq!(logged.call(-7), 49);
    assert_eq!(square.len(), 1);
}

#[test]
fn test_retry_of_logged_propagates_error() {
    let logged = Logged::new("always_fails", |_: ()| -> Result<(), String> {
        Err("boom".to_string())
    });
    let retried = wrap(|args: ()| logged.try_call(args), no_delay(2));

    assert_eq!(retried(()), Err("boom".to_string()));
}

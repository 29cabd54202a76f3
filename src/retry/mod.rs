//! Retry with a fixed delay between attempts
//!
//! Every error returned by the operation counts as a failed attempt; there is no
//! distinction between transient and permanent failures. Once the final attempt
//! fails, its error is returned to the caller untouched.
//!
//! Nothing is logged here. Callers that want to observe retries pass an
//! [`OnRetryFn`] to [`retry_with_callback`].

mod policy;
mod state;

pub use policy::{PolicyError, RetryPolicy};
pub use state::{AttemptOutcome, AttemptState};

use std::future::Future;
use std::thread;
use std::time::Duration;

/// Retry callback for custom handling: `(attempt, error, delay)`
pub type OnRetryFn<E> = Box<dyn Fn(u32, &E, Duration) + Send + Sync>;

/// Run `operation` until it succeeds or the policy runs out of attempts.
///
/// Blocks the calling thread for `policy.delay()` between attempts.
pub fn retry<T, E, F>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    retry_with_callback(policy, operation, None)
}

/// Extended retry with custom callback, invoked before each wait
pub fn retry_with_callback<T, E, F>(
    policy: &RetryPolicy,
    mut operation: F,
    on_retry: Option<OnRetryFn<E>>,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut state = AttemptState::new(policy.max_attempts());

    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(error) => match state.record_failure() {
                AttemptOutcome::Exhausted => return Err(error),
                AttemptOutcome::Retry => {
                    let delay = policy.delay();
                    if let Some(ref callback) = on_retry {
                        callback(state.attempts_made(), &error, delay);
                    }

                    thread::sleep(delay);
                }
            },
        }
    }
}

/// Retry an async operation, waiting with `tokio::time::sleep` instead of blocking
pub async fn retry_async<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut state = AttemptState::new(policy.max_attempts());

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(error) => match state.record_failure() {
                AttemptOutcome::Exhausted => return Err(error),
                AttemptOutcome::Retry => {
                    tokio::time::sleep(policy.delay()).await;
                }
            },
        }
    }
}

/// Wrap `operation` so that every call is retried according to `policy`.
///
/// The returned function has the same argument and result types as `operation`.
/// Several arguments are passed as a tuple. Each attempt gets its own clone of the
/// arguments, and each call keeps its own attempt count, so the wrapper can be
/// shared between threads when `operation` can.
///
/// ```
/// use std::time::Duration;
/// use wrapkit::retry::{wrap, RetryPolicy};
///
/// let policy = RetryPolicy::new(2, Duration::ZERO).unwrap();
/// let parse = wrap(|s: String| s.parse::<u32>(), policy);
/// assert_eq!(parse("42".to_string()), Ok(42));
/// assert!(parse("x".to_string()).is_err());
/// ```
pub fn wrap<A, T, E, F>(operation: F, policy: RetryPolicy) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    A: Clone,
{
    move |args: A| retry(&policy, || operation(args.clone()))
}

/// [`wrap`] with the default policy: 3 attempts, 1 second apart
pub fn wrap_default<A, T, E, F>(operation: F) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    A: Clone,
{
    wrap(operation, RetryPolicy::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    fn no_delay(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::ZERO).unwrap()
    }

    #[test]
    fn test_retry_success_first_try() {
        let calls = Cell::new(0);
        let result: Result<i32, &str> = retry(&no_delay(3), || {
            calls.set(calls.get() + 1);
            Ok(42)
        });
        assert_eq!(result, Ok(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_always_failing_runs_exactly_max_attempts() {
        for n in 1..=5 {
            let calls = Cell::new(0);
            let result: Result<(), String> = retry(&no_delay(n), || {
                calls.set(calls.get() + 1);
                Err(format!("failure {}", calls.get()))
            });
            assert_eq!(calls.get(), n);
            assert_eq!(result, Err(format!("failure {n}")));
        }
    }

    #[test]
    fn test_success_on_kth_attempt_stops() {
        for k in 1..=4 {
            let calls = Cell::new(0);
            let result: Result<u32, &str> = retry(&no_delay(4), || {
                calls.set(calls.get() + 1);
                if calls.get() < k {
                    Err("not yet")
                } else {
                    Ok(calls.get())
                }
            });
            assert_eq!(result, Ok(k));
            assert_eq!(calls.get(), k);
        }
    }

    #[test]
    fn test_delay_between_attempts() {
        let policy = RetryPolicy::from_millis(3, 20).unwrap();
        let start = Instant::now();
        let result: Result<(), &str> = retry(&policy, || Err("down"));
        assert!(result.is_err());
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_single_attempt_does_not_sleep() {
        let policy = RetryPolicy::new(1, Duration::from_secs(5)).unwrap();
        let start = Instant::now();
        let result: Result<(), &str> = retry(&policy, || Err("down"));
        assert_eq!(result, Err("down"));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_callback_invoked_between_attempts() {
        let seen = Arc::new(AtomicU32::new(0));
        let seen_cb = Arc::clone(&seen);
        let on_retry: OnRetryFn<&'static str> = Box::new(move |attempt, error, delay| {
            assert_eq!(*error, "flaky");
            assert_eq!(delay, Duration::ZERO);
            seen_cb.store(attempt, Ordering::SeqCst);
        });

        let result: Result<(), &'static str> =
            retry_with_callback(&no_delay(4), || Err("flaky"), Some(on_retry));

        assert!(result.is_err());
        // Called after failures 1..=3, not after the last one
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_wrap_forwards_arguments() {
        let calls = AtomicU32::new(0);
        let add = wrap(
            |(a, b): (i32, i32)| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err("first call fails")
                } else {
                    Ok(a + b)
                }
            },
            no_delay(2),
        );
        assert_eq!(add((2, 3)), Ok(5));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_wrap_calls_start_fresh() {
        let calls = AtomicU32::new(0);
        let always_fails = wrap(
            |_: ()| -> Result<(), &'static str> {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("nope")
            },
            no_delay(2),
        );
        assert!(always_fails(()).is_err());
        assert!(always_fails(()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_async_success_after_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, &str> = retry_async(&no_delay(3), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err("not yet")
                } else {
                    Ok("ok")
                }
            }
        })
        .await;
        assert_eq!(result, Ok("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_async_exhaustion_returns_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), u32> = retry_async(&no_delay(2), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(n) }
        })
        .await;
        assert_eq!(result, Err(2));
    }
}

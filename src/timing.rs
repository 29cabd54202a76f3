//! Execution timing
//!
//! Measures how long a wrapped function takes and reports it after every call.

use std::any::type_name;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// Wall-clock stopwatch started on creation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time without stopping
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `f` once and return its result together with the wall-clock time it took
pub fn time_call<R, F>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let timer = Timer::start();
    let result = f();
    (result, timer.elapsed())
}

/// The line printed after each timed call
pub fn format_report(name: &str, duration: Duration) -> String {
    format!(
        "Function {} took {} seconds to run.",
        name,
        duration.as_secs_f64()
    )
}

/// A function that reports its own running time
pub struct Timed<F> {
    name: String,
    func: F,
}

/// Wrap `func`, naming it after its type
pub fn timed<F>(func: F) -> Timed<F> {
    Timed::new(type_name::<F>(), func)
}

/// Wrap `func` under an explicit name
pub fn timed_named<F>(name: &str, func: F) -> Timed<F> {
    Timed::new(name, func)
}

impl<F> Timed<F> {
    pub fn new(name: &str, func: F) -> Self {
        Self {
            name: name.to_string(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the function and print its duration to stdout.
    ///
    /// Stdout is only locked for the report line, after the function returns.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let (result, report) = self.measure(args);
        self.write_report(&mut io::stdout().lock(), &report);
        result
    }

    /// Call the function and write its duration to `out`.
    ///
    /// The result is returned unchanged even if writing the report fails.
    pub fn call_reporting<A, R, W>(&self, args: A, out: &mut W) -> R
    where
        F: Fn(A) -> R,
        W: Write,
    {
        let (result, report) = self.measure(args);
        self.write_report(out, &report);
        result
    }

    fn measure<A, R>(&self, args: A) -> (R, String)
    where
        F: Fn(A) -> R,
    {
        let (result, elapsed) = time_call(|| (self.func)(args));
        (result, format_report(&self.name, elapsed))
    }

    fn write_report<W: Write>(&self, out: &mut W, report: &str) {
        if let Err(e) = writeln!(out, "{report}") {
            debug!(error = %e, name = %self.name, "failed to write timing report");
        }
    }
}

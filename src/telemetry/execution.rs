//! Execution logging wrapper.

use std::any::type_name;
use tracing::{info, Level};

use super::init::ensure_logging;

/// Target used for the start/finish events
pub const EXEC_TARGET: &str = "wrapkit::exec";

/// A function that logs when it starts and when it finishes.
///
/// Use [`Logged::try_call`] for functions returning `Result`; [`Logged::call`]
/// cannot tell an `Err` from a value.
pub struct Logged<F> {
    name: String,
    func: F,
}

/// Set up process-wide logging at `level` (first use only) and wrap `func`,
/// naming it after its type.
pub fn log_execution<F>(func: F, level: Level) -> Logged<F> {
    log_execution_named(type_name::<F>(), func, level)
}

/// [`log_execution`] under an explicit name
pub fn log_execution_named<F>(name: &str, func: F, level: Level) -> Logged<F> {
    ensure_logging(level);
    Logged::new(name, func)
}

impl<F> Logged<F> {
    /// Wrap `func` without touching the global subscriber
    pub fn new(name: &str, func: F) -> Self {
        Self {
            name: name.to_string(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Log, call, log again. A panic in `func` skips the finish event.
    ///
    /// For a `Result`-returning `func` this logs the finish event even on `Err`;
    /// call [`Logged::try_call`] instead, which skips it.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        info!(target: EXEC_TARGET, "Executing {}", self.name);
        let result = (self.func)(args);
        info!(target: EXEC_TARGET, "Finished executing {}", self.name);
        result
    }

    /// Like [`Logged::call`] for fallible functions: the finish event is only
    /// emitted on success, and an error is returned unchanged.
    pub fn try_call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
    {
        info!(target: EXEC_TARGET, "Executing {}", self.name);
        let value = (self.func)(args)?;
        info!(target: EXEC_TARGET, "Finished executing {}", self.name);
        Ok(value)
    }
}

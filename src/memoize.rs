//! Memoization
//!
//! Caches results keyed by the exact argument value. The cache is never evicted
//! and lives as long as the wrapper does.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// A function wrapped with an unbounded result cache
pub struct Memoized<A, R, F> {
    func: F,
    cache: Mutex<HashMap<A, R>>,
}

/// Wrap `func` so repeated calls with equal arguments reuse the first result
pub fn memoize<A, R, F>(func: F) -> Memoized<A, R, F>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoized::new(func)
}

/// Wrap a fallible `func`; use [`Memoized::try_call`] to cache only its successes
pub fn memoize_ok<A, T, E, F>(func: F) -> Memoized<A, T, F>
where
    F: Fn(A) -> Result<T, E>,
    A: Hash + Eq + Clone,
    T: Clone,
{
    Memoized::new(func)
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Hash + Eq,
{
    /// Wrap `func` with an empty cache
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<A, R>> {
        // A panic inside `func` never happens while the lock is held
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached argument values
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether a result for `args` is cached
    pub fn contains(&self, args: &A) -> bool {
        self.lock().contains_key(args)
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    /// Return the cached result for `args`, computing and storing it on a miss.
    ///
    /// The lock is released while `func` runs, so two threads missing on the same
    /// key may both compute it; the first stored value wins.
    pub fn call(&self, args: A) -> R {
        if let Some(hit) = self.lock().get(&args) {
            trace!("memoize cache hit");
            return hit.clone();
        }
        trace!("memoize cache miss");

        let result = (self.func)(args.clone());
        self.lock().entry(args).or_insert(result).clone()
    }
}

impl<A, T, E, F> Memoized<A, T, F>
where
    F: Fn(A) -> Result<T, E>,
    A: Hash + Eq + Clone,
    T: Clone,
{
    /// Like [`Memoized::call`] for fallible functions.
    ///
    /// Only successful results are cached. An error is returned as is and the next
    /// call with the same arguments runs `func` again.
    pub fn try_call(&self, args: A) -> Result<T, E> {
        if let Some(hit) = self.lock().get(&args) {
            trace!("memoize cache hit");
            return Ok(hit.clone());
        }
        trace!("memoize cache miss");

        let value = (self.func)(args.clone())?;
        Ok(self.lock().entry(args).or_insert(value).clone())
    }
}

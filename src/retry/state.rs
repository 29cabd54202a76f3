//! Per-call attempt bookkeeping

/// What to do after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Sleep for the policy delay, then attempt again
    Retry,
    /// The final permitted attempt failed; hand its error back to the caller
    Exhausted,
}

/// Attempt counter for a single call of a retried operation.
///
/// A fresh state is created for every call, so separate calls never share a count.
#[derive(Debug, Clone)]
pub struct AttemptState {
    attempts_made: u32,
    max_attempts: u32,
}

impl AttemptState {
    /// Start counting from zero
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts_made: 0,
            max_attempts,
        }
    }

    /// Number of failed attempts recorded so far
    pub fn attempts_made(&self) -> u32 {
        self.attempts_made
    }

    /// Record a failed attempt and decide whether another one is allowed
    pub fn record_failure(&mut self) -> AttemptOutcome {
        if self.attempts_made < self.max_attempts {
            self.attempts_made += 1;
        }
        if self.attempts_made >= self.max_attempts {
            AttemptOutcome::Exhausted
        } else {
            AttemptOutcome::Retry
        }
    }
}

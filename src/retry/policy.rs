//! Retry configuration

use std::time::Duration;
use thiserror::Error;

/// Errors raised when building a [`RetryPolicy`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("max_attempts must be at least 1 (got 0)")]
    ZeroAttempts,
}

/// How many times to run an operation and how long to wait between runs.
///
/// Fields are private so a policy cannot be changed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Attempts made when no policy is given
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Wait between attempts when no policy is given
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// Create a policy. `max_attempts` counts the first attempt, so it must be at least 1.
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self, PolicyError> {
        if max_attempts == 0 {
            return Err(PolicyError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    /// Same as [`RetryPolicy::new`] with the delay given in milliseconds
    pub fn from_millis(max_attempts: u32, delay_ms: u64) -> Result<Self, PolicyError> {
        Self::new(max_attempts, Duration::from_millis(delay_ms))
    }

    /// Total number of attempts, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fixed wait between a failed attempt and the next one
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Upper bound on the time spent sleeping during one call, saturating at `Duration::MAX`
    pub fn worst_case_wait(&self) -> Duration {
        self.delay.saturating_mul(self.max_attempts - 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert_eq!(
            RetryPolicy::new(0, Duration::ZERO),
            Err(PolicyError::ZeroAttempts)
        );
        let err = RetryPolicy::from_millis(0, 10).unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn test_single_attempt_never_waits() {
        let policy = RetryPolicy::from_millis(1, 5000).unwrap();
        assert_eq!(policy.worst_case_wait(), Duration::ZERO);
    }

    #[test]
    fn test_worst_case_wait() {
        let policy = RetryPolicy::from_millis(4, 250).unwrap();
        assert_eq!(policy.worst_case_wait(), Duration::from_millis(750));
    }

    #[test]
    fn test_worst_case_wait_saturates() {
        let policy = RetryPolicy::new(u32::MAX, Duration::from_secs(u64::MAX / 2)).unwrap();
        assert_eq!(policy.worst_case_wait(), Duration::MAX);
    }
}

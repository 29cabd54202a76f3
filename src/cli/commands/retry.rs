//! Retry command implementation
//!
//! Runs a command until it exits successfully or the policy gives up.

use anyhow::Context;
use std::cell::Cell;

use super::split_command;
use crate::cli::output::Output;
use crate::retry::{retry_with_callback, OnRetryFn, RetryPolicy};
use crate::util::{run_command, CommandError};

/// Run the retry command
pub fn run_retry(policy: &RetryPolicy, command: &[String]) -> anyhow::Result<()> {
    let (program, args) = split_command(command)?;
    let max_attempts = policy.max_attempts();

    let on_retry: OnRetryFn<CommandError> = Box::new(move |attempt, error, delay| {
        Output::warning(&format!(
            "Attempt {}/{} failed: {}. Retrying in {:?}",
            attempt, max_attempts, error, delay
        ));
    });

    let attempts = Cell::new(0u32);
    retry_with_callback(
        policy,
        || {
            attempts.set(attempts.get() + 1);
            run_command(program, args)
        },
        Some(on_retry),
    )
    .with_context(|| format!("Gave up after {max_attempts} attempt(s)"))?;

    if attempts.get() > 1 {
        Output::success(&format!(
            "{} succeeded on attempt {}/{}",
            Output::program(program),
            attempts.get(),
            max_attempts
        ));
    }
    Ok(())
}

//! wrapkit - function wrappers
//!
//! Four independent wrappers that add behaviour around a function without
//! changing what it takes or returns:
//!
//! - [`retry`]: re-run a failing operation with a fixed delay
//! - [`memoize`]: cache results by argument value
//! - [`timing`]: report how long each call took
//! - [`telemetry`]: log the start and finish of each call
//!
//! The wrappers share no state and can be stacked in any order.

pub mod cli;
pub mod config;
pub mod memoize;
pub mod retry;
pub mod telemetry;
pub mod timing;
pub mod util;

pub use memoize::{memoize, Memoized};
pub use retry::{retry, wrap, RetryPolicy};
pub use telemetry::{log_execution, Logged};
pub use timing::{timed, Timed};

//! Logging for wrapkit.
//!
//! - Process-wide `tracing` subscriber setup, explicit or on first use
//! - The execution logging wrapper, which reports start and finish of each call
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing for maximum performance

mod execution;
mod init;

pub use execution::{log_execution, log_execution_named, Logged, EXEC_TARGET};
pub use init::{ensure_logging, init_logging, LogConfig};

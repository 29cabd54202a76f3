//! Utility functions and helpers

pub mod cmd;

pub use cmd::{log_cmd, run_command, CommandError};

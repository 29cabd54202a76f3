//! CLI layer
//!
//! Command-line interface using clap.

pub mod commands;
pub mod output;

pub use output::Output;

//! Logging initialization.
//!
//! One global `tracing` subscriber per process, writing to stdout.

use once_cell::sync::OnceCell;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Outcome of the first `ensure_logging` call
static LOGGING: OnceCell<bool> = OnceCell::new();

/// How the global subscriber formats and filters events.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Lowest level let through, for every target not named in `RUST_LOG`
    pub level: Level,
    /// Print source file and line of each event
    pub include_file_line: bool,
    /// Print the event target (module path)
    pub include_target: bool,
    /// Colour the output; on by default only when stdout is a terminal
    pub ansi_colors: bool,
    /// Single-line compact format
    pub compact: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::with_level(Level::INFO)
    }
}

impl LogConfig {
    /// Compact output at `level`
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            include_file_line: false,
            include_target: true,
            ansi_colors: std::io::stdout().is_terminal(),
            compact: true,
        }
    }

    /// Debug level with source locations, used by `--verbose`
    pub fn development() -> Self {
        Self {
            include_file_line: true,
            compact: false,
            ..Self::with_level(Level::DEBUG)
        }
    }

    fn filter(&self) -> anyhow::Result<EnvFilter> {
        Ok(EnvFilter::from_default_env()
            .add_directive(self.level.into())
            .add_directive(format!("wrapkit={}", self.level).parse()?))
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` directives are honoured on top of the configured level. Fails if
/// a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let fmt_layer = fmt::layer()
        .with_ansi(config.ansi_colors)
        .with_target(config.include_target)
        .with_file(config.include_file_line)
        .with_line_number(config.include_file_line);

    let fmt_layer = if config.compact {
        fmt_layer.compact().boxed()
    } else {
        fmt_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(config.filter()?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Set up process-wide logging at `level` unless it has been set up already.
///
/// Only the first call in a process has any effect; its level sticks. Returns
/// whether our subscriber is the global one (false when something else had
/// installed a subscriber first).
pub fn ensure_logging(level: Level) -> bool {
    *LOGGING.get_or_init(|| init_logging(&LogConfig::with_level(level)).is_ok())
}

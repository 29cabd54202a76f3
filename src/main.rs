//! wrapkit CLI entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wrapkit::cli::commands;
use wrapkit::cli::Output;
use wrapkit::config::{parse_level, WrapConfig};
use wrapkit::retry::RetryPolicy;
use wrapkit::telemetry::{init_logging, LogConfig};
use wrapkit::util::CommandError;

#[derive(Parser)]
#[command(name = "wrapkit")]
#[command(author, version, about = "Run a command under retry, timing or logging wrappers", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "WRAPKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command until it succeeds, waiting a fixed delay between attempts
    Retry {
        /// Total attempts, including the first (default: 3)
        #[arg(short = 'n', long, env = "WRAPKIT_MAX_ATTEMPTS")]
        max_attempts: Option<u32>,
        /// Delay between attempts in milliseconds (default: 1000)
        #[arg(long, env = "WRAPKIT_DELAY_MS")]
        delay_ms: Option<u64>,
        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
    /// Run a command once and print how long it took
    Time {
        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
    /// Run a command once, logging when it starts and finishes
    Log {
        /// Log level (default: info)
        #[arg(long)]
        level: Option<String>,
        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

fn main() {
    if let Err(err) = run() {
        Output::error(&format!("{err:#}"));
        let code = err
            .downcast_ref::<CommandError>()
            .map(CommandError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => WrapConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => WrapConfig::default(),
    };

    let level = match cli.command {
        Commands::Log {
            level: Some(ref level),
            ..
        } => parse_level(level)?,
        _ => config.log_level()?,
    };
    let log_config = if cli.verbose {
        LogConfig::development()
    } else {
        LogConfig::with_level(level)
    };
    init_logging(&log_config)?;

    match cli.command {
        Commands::Retry {
            max_attempts,
            delay_ms,
            command,
        } => {
            let policy = RetryPolicy::from_millis(
                max_attempts.unwrap_or(config.retry.max_attempts),
                delay_ms.unwrap_or(config.retry.delay_ms),
            )?;
            commands::retry::run_retry(&policy, &command)?;
        }
        Commands::Time { command } => {
            commands::time::run_time(&command)?;
        }
        Commands::Log { command, .. } => {
            commands::log::run_log(level, &command)?;
        }
    }

    Ok(())
}

//! Log command implementation

use tracing::Level;

use super::split_command;
use crate::telemetry::log_execution_named;
use crate::util::run_command;

/// Run the log command
pub fn run_log(level: Level, command: &[String]) -> anyhow::Result<()> {
    let (program, args) = split_command(command)?;
    let wrapped = log_execution_named(program, |args: &[String]| run_command(program, args), level);
    wrapped.try_call(args)?;
    Ok(())
}

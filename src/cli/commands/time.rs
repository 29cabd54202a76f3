//! Time command implementation

use super::split_command;
use crate::timing::timed_named;
use crate::util::run_command;

/// Run the time command
pub fn run_time(command: &[String]) -> anyhow::Result<()> {
    let (program, args) = split_command(command)?;
    let wrapped = timed_named(program, |args: &[String]| run_command(program, args));
    wrapped.call(args)?;
    Ok(())
}

//! CLI command implementations
//!
//! Each command is implemented in its own module.

pub mod log;
pub mod retry;
pub mod time;

/// Split `program args...` as collected after `--`
fn split_command(command: &[String]) -> anyhow::Result<(&str, &[String])> {
    match command.split_first() {
        Some((program, args)) => Ok((program.as_str(), args)),
        None => anyhow::bail!("No command given (usage: wrapkit <SUBCOMMAND> -- <PROGRAM> [ARGS]...)"),
    }
}

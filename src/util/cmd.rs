//! Running external commands.

use std::io;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Errors from a single run of an external command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with status {code}")]
    Exited { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },
}

impl CommandError {
    /// Exit code to hand back to our own caller
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Exited { code, .. } => *code,
            CommandError::Spawn { .. } | CommandError::Terminated { .. } => 1,
        }
    }
}

/// Log a command just before execution.
///
/// Emits a `tracing::debug!` event with the program name, arguments, and
/// working directory. Visible when running with `--verbose` (which sets
/// `wrapkit=debug`) or via `RUST_LOG=wrapkit::cmd=debug`.
pub fn log_cmd(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cwd = cmd
        .get_current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    debug!(
        target: "wrapkit::cmd",
        %program,
        ?args,
        %cwd,
        "exec"
    );
}

/// Run `program` with `args`, inheriting stdio, and wait for it.
///
/// Anything other than a zero exit status is an error.
pub fn run_command(program: &str, args: &[String]) -> Result<(), CommandError> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    log_cmd(&cmd);

    let status = cmd.status().map_err(|source| CommandError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(CommandError::Exited {
            program: program.to_string(),
            code,
        }),
        None => Err(CommandError::Terminated {
            program: program.to_string(),
        }),
    }
}

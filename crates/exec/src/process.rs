// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command execution under a hard wall-clock deadline.
//!
//! The metacharacter denylist below is a pre-filter against naive injection
//! through concatenated path fragments. It is not a sandbox boundary: plenty
//! of shell (globbing, word splitting, quoting tricks) passes through it,
//! and the command string is still handed to a shell. Treat it as a tripwire,
//! not a security control.

use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Patterns rejected before any process is spawned.
pub const DENYLIST: &[&str] = &[
    ";", "&&", "||", "|", "`", "$", "$(", "${", "<", ">", ">>", "&", "\n", "\r",
];

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("empty command")]
    EmptyCommand,

    #[error("command contains potentially dangerous characters ({pattern:?})")]
    DangerousCharacters { pattern: &'static str },

    #[error("failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("process timeout after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("process terminated abnormally{}", .signal.map(|s| format!(" (signal {s})")).unwrap_or_default())]
    Signaled { signal: Option<i32> },
}

impl ExecError {
    /// True when the failure was decided before any process was spawned.
    pub fn pre_spawn(&self) -> bool {
        matches!(self, Self::EmptyCommand | Self::DangerousCharacters { .. })
    }
}

/// Run `command` through the platform shell, waiting at most `timeout`.
///
/// Returns the process exit code verbatim; a non-zero code is not an error
/// at this layer. The deadline and the wait are raced so whichever finishes
/// first decides the outcome: on timeout the child is killed and reaped
/// before the error is returned, so no zombie outlives the call.
pub async fn run_shell(command: &str, timeout: Duration) -> Result<i32, ExecError> {
    if command.is_empty() {
        return Err(ExecError::EmptyCommand);
    }
    if let Some(pattern) = first_denied(command) {
        return Err(ExecError::DangerousCharacters { pattern });
    }

    let mut child = shell_command(command)
        .kill_on_drop(true)
        .spawn()
        .map_err(ExecError::Spawn)?;

    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(waited) => waited.map_err(ExecError::Wait)?,
        Err(_) => {
            tracing::warn!(
                %command,
                seconds = timeout.as_secs(),
                "command deadline elapsed, killing process"
            );
            // start_kill can fail if the child already exited; the wait
            // below reaps it either way.
            let _ = child.start_kill();
            let _ = child.wait().await;
            return Err(ExecError::Timeout {
                seconds: timeout.as_secs(),
            });
        }
    };

    match status.code() {
        Some(code) => Ok(code),
        None => Err(ExecError::Signaled {
            signal: termination_signal(&status),
        }),
    }
}

fn first_denied(command: &str) -> Option<&'static str> {
    DENYLIST
        .iter()
        .copied()
        .find(|pattern| command.contains(pattern))
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(unix)]
fn termination_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

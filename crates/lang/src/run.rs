// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The sequential run loop: validate, dispatch, plan, execute, classify.

use crate::language::Language;
use crate::plan;
use crate::steps::Phase;

use polyrun_core::{config, ValidateError, WorkspaceError, WorkspaceLimiter};
use polyrun_exec::{run_shell, ExecError};

use std::path::Path;
use thiserror::Error;

/// Terminal failure of one file-run invocation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error("unsupported file extension: .{extension}")]
    UnsupportedLanguage { extension: String },

    #[error("{language} toolchain not found; {hint}")]
    ToolchainMissing {
        language: &'static str,
        hint: &'static str,
    },

    /// A compile step failed, either with a non-zero toolchain exit or a
    /// launch-level failure (timeout, signal, dangerous characters).
    #[error("Compilation failed: {cause}")]
    Compile { cause: String, code: Option<i32> },

    /// An execute step failed to produce a normal exit.
    #[error("Execution failed: {0}")]
    Execute(#[from] ExecError),
}

impl RunError {
    /// Which step phase failed, where the distinction applies.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Compile { .. } => Some(Phase::Compile),
            Self::Execute(_) => Some(Phase::Execute),
            _ => None,
        }
    }
}

/// Run one source file end to end, returning the executed program's exit
/// code verbatim.
///
/// Steps run strictly sequentially; the first failing step short-circuits
/// the rest and is classified by its phase. The workspace (if any) is
/// cleaned up on every exit path.
pub async fn run_file(source: &Path, limiter: &WorkspaceLimiter) -> Result<i32, RunError> {
    polyrun_core::validate_source_file(source)?;
    let extension = polyrun_core::file_extension(source)?;
    let language = Language::from_extension(&extension)
        .ok_or(RunError::UnsupportedLanguage { extension })?;

    tracing::info!(
        language = language.name(),
        file = %source.display(),
        "running source file"
    );

    let mut plan = plan::plan(language, source, limiter)?;

    if config::keep_temp_requested() {
        if let Some(workspace) = plan.workspace.as_mut() {
            workspace.set_retain(true);
            eprintln!(
                "Temporary directory for {}: {}",
                language.name(),
                workspace.path().display()
            );
        }
    }

    let mut exit_code = 0;
    for step in &plan.steps {
        tracing::info!(
            phase = ?step.phase,
            command = %step.command,
            timeout_s = step.timeout.as_secs(),
            "running step"
        );

        match run_shell(&step.command, step.timeout).await {
            Ok(code) if step.phase == Phase::Compile && code != 0 => {
                return Err(RunError::Compile {
                    cause: format!("{} returned exit code {}", step.tool, code),
                    code: Some(code),
                });
            }
            Ok(code) => exit_code = code,
            Err(err) => {
                // A compile step that times out or dies on a signal is still
                // a compile failure; execute-step failures keep their own
                // label rather than being reclassified.
                return Err(match step.phase {
                    Phase::Compile => RunError::Compile {
                        cause: err.to_string(),
                        code: None,
                    },
                    Phase::Execute => RunError::Execute(err),
                });
            }
        }
    }

    Ok(exit_code)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

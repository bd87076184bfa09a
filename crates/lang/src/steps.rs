// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered subprocess steps with per-step timeout and failure phase.

use polyrun_core::config;
use std::time::Duration;

/// Which phase a step's failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Compile,
    Execute,
}

/// One subprocess invocation in a language's run plan.
///
/// Produced by the per-language planner, consumed once by the run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    /// Full shell command text, with paths already quoted.
    pub command: String,
    /// Hard wall-clock budget for this step.
    pub timeout: Duration,
    /// Failure classification for this step.
    pub phase: Phase,
    /// Toolchain label used in failure messages.
    pub tool: String,
}

impl CommandStep {
    pub fn compile(tool: impl Into<String>, command: String) -> Self {
        Self {
            command,
            timeout: config::COMPILE_TIMEOUT,
            phase: Phase::Compile,
            tool: tool.into(),
        }
    }

    pub fn execute(tool: impl Into<String>, command: String) -> Self {
        Self {
            command,
            timeout: config::EXECUTE_TIMEOUT,
            phase: Phase::Execute,
            tool: tool.into(),
        }
    }

    /// Single build-and-run step billed the combined compile+execute budget.
    pub fn combined(tool: impl Into<String>, command: String) -> Self {
        Self {
            command,
            timeout: config::COMPILE_TIMEOUT + config::EXECUTE_TIMEOUT,
            phase: Phase::Execute,
            tool: tool.into(),
        }
    }
}

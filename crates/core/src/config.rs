// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool-wide configuration constants.

use std::time::Duration;

/// Maximum accepted source file size (50 MB).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Wall-clock budget for a compile step.
pub const COMPILE_TIMEOUT: Duration = Duration::from_secs(60);

/// Wall-clock budget for an execute step.
pub const EXECUTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on a generated workspace path, in bytes.
pub const MAX_PATH_LENGTH: usize = 4096;

/// Ceiling on concurrently live workspaces per process.
pub const MAX_WORKSPACES: usize = 100;

/// Environment variable that retains workspaces for debugging.
pub const KEEP_TEMP_ENV: &str = "KEEP_TEMP";

/// True when the user asked to keep workspace directories around
/// (any non-empty value of [`KEEP_TEMP_ENV`]).
pub fn keep_temp_requested() -> bool {
    std::env::var_os(KEEP_TEMP_ENV).is_some_and(|value| !value.is_empty())
}

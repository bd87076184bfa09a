// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for workspace lifecycle and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from creating a scoped workspace directory.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The process-wide workspace ceiling is already reached.
    #[error("too many temporary workspaces in use (limit {limit})")]
    ResourceExhausted { limit: usize },

    /// The generated path exceeds the platform-safe length ceiling.
    #[error("workspace path too long ({length} bytes, max {max})")]
    PathTooLong { length: usize, max: usize },

    /// A filesystem operation failed. Covers directory creation (including
    /// a race with a colliding name, surfaced without retry) and permission
    /// restriction.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors rejecting an input source file before any run work starts.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("source file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("not a regular file: {}", path.display())]
    NotRegularFile { path: PathBuf },

    #[error("file too large ({size} bytes, max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("cannot read source file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file has no extension: {}", path.display())]
    MissingExtension { path: PathBuf },
}

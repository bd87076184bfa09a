// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped temporary workspace directories.
//!
//! A [`Workspace`] is a uniquely named directory under the system temp root,
//! owner-only where the platform supports permission bits, and removed when
//! the owning run attempt ends unless retention was requested. Capacity is
//! reserved from a [`WorkspaceLimiter`] before any filesystem work and
//! released exactly once on drop.

use crate::config;
use crate::error::WorkspaceError;
use crate::limiter::WorkspaceLimiter;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    retain: bool,
    limiter: WorkspaceLimiter,
}

impl Workspace {
    /// Create a fresh workspace, reserving limiter capacity first.
    ///
    /// Directory names mix the process id, a nanosecond timestamp, and a
    /// random 64-bit value. A colliding name therefore surfaces as an
    /// immediate error rather than a retry.
    pub fn create(limiter: &WorkspaceLimiter) -> Result<Self, WorkspaceError> {
        if !limiter.try_reserve() {
            return Err(WorkspaceError::ResourceExhausted {
                limit: limiter.ceiling(),
            });
        }

        let path = unique_path();
        let length = path.as_os_str().len();
        if length > config::MAX_PATH_LENGTH {
            limiter.release();
            return Err(WorkspaceError::PathTooLong {
                length,
                max: config::MAX_PATH_LENGTH,
            });
        }

        if let Err(err) = fs::create_dir(&path) {
            limiter.release();
            return Err(WorkspaceError::Io {
                context: format!("failed to create workspace directory {}", path.display()),
                source: err,
            });
        }

        if let Err(err) = restrict_permissions(&path) {
            // Never leave an over-permissive directory behind.
            let _ = fs::remove_dir_all(&path);
            limiter.release();
            return Err(WorkspaceError::Io {
                context: format!("failed to restrict permissions on {}", path.display()),
                source: err,
            });
        }

        Ok(Self {
            path,
            retain: false,
            limiter: limiter.clone(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the directory on disk after drop (KEEP_TEMP debugging).
    pub fn set_retain(&mut self, retain: bool) {
        self.retain = retain;
    }

    pub fn retained(&self) -> bool {
        self.retain
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.limiter.release();
        if self.retain {
            return;
        }
        // Cleanup failure must never mask the run's real result.
        if let Err(error) = fs::remove_dir_all(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "failed to clean up workspace directory"
            );
        }
    }
}

fn unique_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let (random, _) = uuid::Uuid::new_v4().as_u64_pair();
    std::env::temp_dir().join(format!(
        "polyrun_{}_{}_{}",
        std::process::id(),
        nanos,
        random
    ))
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    // No owner-only permission bits to set on this platform.
    Ok(())
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;

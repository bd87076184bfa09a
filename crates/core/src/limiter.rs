// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide admission control for temporary workspaces.

use parking_lot::Mutex;
use std::sync::Arc;

/// Counter bounding concurrently live [`Workspace`](crate::Workspace)s.
///
/// Cloning shares the underlying count. A handle is passed into
/// `Workspace::create` rather than living in a global so tests can inject a
/// fresh counter per case.
#[derive(Clone, Debug)]
pub struct WorkspaceLimiter {
    ceiling: usize,
    live: Arc<Mutex<usize>>,
}

impl WorkspaceLimiter {
    pub fn new(ceiling: usize) -> Self {
        Self {
            ceiling,
            live: Arc::new(Mutex::new(0)),
        }
    }

    /// Reserve capacity for one workspace.
    ///
    /// The ceiling check and the increment happen under one lock so two
    /// concurrent callers cannot both pass the check and overshoot.
    pub fn try_reserve(&self) -> bool {
        let mut live = self.live.lock();
        if *live >= self.ceiling {
            return false;
        }
        *live += 1;
        true
    }

    /// Release one reservation.
    ///
    /// Saturates at zero: an unmatched release is a logic error but must
    /// not take the process down.
    pub fn release(&self) {
        let mut live = self.live.lock();
        *live = live.saturating_sub(1);
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Number of currently live reservations.
    pub fn live(&self) -> usize {
        *self.live.lock()
    }
}

impl Default for WorkspaceLimiter {
    fn default() -> Self {
        Self::new(crate::config::MAX_WORKSPACES)
    }
}

#[cfg(test)]
#[path = "limiter_tests.rs"]
mod tests;

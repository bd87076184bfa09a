// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! polyrun-core: workspace lifecycle, admission control, and input validation

pub mod config;
pub mod error;
pub mod limiter;
pub mod validate;
pub mod workspace;

pub use error::{ValidateError, WorkspaceError};
pub use limiter::WorkspaceLimiter;
pub use validate::{file_extension, validate_source_file};
pub use workspace::Workspace;

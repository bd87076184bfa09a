// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! polyrun-exec: shell command execution with timeouts and toolchain lookup

pub mod process;
pub mod toolchain;

pub use process::{run_shell, ExecError};
pub use toolchain::{find_first, find_tool, resolve};

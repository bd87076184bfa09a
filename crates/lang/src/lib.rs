// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! polyrun-lang: language dispatch and the build-then-run protocol

pub mod language;
mod plan;
pub mod run;
pub mod steps;

pub use language::Language;
pub use run::{run_file, RunError};
pub use steps::{CommandStep, Phase};

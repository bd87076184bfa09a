// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! polyrun: run a single source file, compiling first when needed.

use clap::Parser;
use polyrun_core::{config, WorkspaceLimiter};
use std::path::PathBuf;
use std::process::ExitCode;

const LANGUAGE_HELP: &str = "\
Supported languages and extensions:

  Compiled languages:
    C:           .c
    C++:         .cpp, .cc, .cxx, .c++
    Rust:        .rs
    Go:          .go
    Swift:       .swift
    Java:        .java
    Kotlin:      .kt, .kts
    Scala:       .scala
    C#:          .cs
    TypeScript:  .ts

  Interpreted languages:
    Python:      .py, .py3
    JavaScript:  .js, .mjs
    Ruby:        .rb
    PHP:         .php
    Lua:         .lua
    Perl:        .pl, .pm
    Bash/Shell:  .sh, .bash

Environment variables:
  KEEP_TEMP=1    Keep temporary directories for debugging
";

/// Run a single source file, inferring the language from its extension.
///
/// On success the executed program's exit code passes through; any
/// tool-level failure exits 1.
#[derive(Debug, Parser)]
#[command(name = "polyrun", version, after_help = LANGUAGE_HELP)]
struct Cli {
    /// Source file to run
    file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limiter = WorkspaceLimiter::new(config::MAX_WORKSPACES);

    match polyrun_lang::run_file(&cli.file, &limiter).await {
        Ok(code) => ExitCode::from(exit_byte(code)),
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Narrow a child exit code to the byte the OS can represent.
fn exit_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

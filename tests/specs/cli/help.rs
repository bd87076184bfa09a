// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs.

use crate::prelude::*;

#[test]
fn polyrun_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn polyrun_help_lists_supported_languages() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Supported languages")
        .stdout_has("Python")
        .stdout_has("TypeScript")
        .stdout_has(".cpp")
        .stdout_has("Bash/Shell");
}

#[test]
fn polyrun_help_documents_keep_temp() {
    cli().args(&["--help"]).passes().stdout_has("KEEP_TEMP");
}

#[test]
fn polyrun_no_args_fails_with_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn polyrun_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for running source files end to end.

use crate::prelude::*;

#[test]
fn missing_file_exits_one_with_error() {
    cli()
        .arg("definitely-not-here.py")
        .exits(1)
        .stderr_has("Error:")
        .stderr_has("definitely-not-here.py");
}

#[test]
fn unknown_extension_exits_one() {
    let temp = Project::empty();
    let file = temp.file("prog.zig", "pub fn main() void {}\n");

    cli()
        .arg(&file)
        .exits(1)
        .stderr_has("unsupported file extension: .zig");
}

#[test]
fn file_without_extension_exits_one() {
    let temp = Project::empty();
    let file = temp.file("Makefile", "all:\n");

    cli().arg(&file).exits(1).stderr_has("Error:");
}

#[cfg(unix)]
#[test]
fn shell_script_exit_code_passes_through() {
    let temp = Project::empty();

    let ok = temp.file("ok.sh", "exit 0\n");
    cli().arg(&ok).passes();

    let three = temp.file("three.sh", "exit 3\n");
    cli().arg(&three).exits(3);
}

#[cfg(unix)]
#[test]
fn shell_script_output_reaches_stdout() {
    let temp = Project::empty();
    let file = temp.file("hello.sh", "echo hello-from-script\n");

    cli().arg(&file).passes().stdout_has("hello-from-script");
}

/// A failing compiler surfaces as a compilation error carrying the tool's
/// exit code, and the process exits 1.
#[cfg(unix)]
#[test]
fn compile_failure_reports_the_compiler_exit_code() {
    let temp = Project::empty();
    temp.tool("gcc", "#!/bin/sh\nexit 42\n");
    let file = temp.file("broken.c", "int main( {\n");

    cli()
        .env("PATH", temp.search_path())
        .arg(&file)
        .exits(1)
        .stderr_has("Compilation failed")
        .stderr_has("gcc returned exit code 42");
}

/// With KEEP_TEMP set, the temporary workspace survives the run and its
/// location is printed to stderr.
#[cfg(unix)]
#[test]
fn keep_temp_retains_the_workspace() {
    let temp = Project::empty();
    temp.tool(
        "gcc",
        concat!(
            "#!/bin/sh\n",
            "while [ \"$#\" -gt 0 ]; do\n",
            "  if [ \"$1\" = \"-o\" ]; then out=\"$2\"; fi\n",
            "  shift\n",
            "done\n",
            "printf '#!/bin/sh\\nexit 0\\n' > \"$out\"\n",
            "chmod +x \"$out\"\n",
        ),
    );
    let file = temp.file("keep.c", "int main(void) { return 0; }\n");

    let checked = cli()
        .env("PATH", temp.search_path())
        .env("KEEP_TEMP", "1")
        .arg(&file)
        .passes()
        .stderr_has("Temporary directory for C:");

    let stderr = checked.stderr();
    let line = stderr
        .lines()
        .find(|line| line.starts_with("Temporary directory for C:"))
        .unwrap();
    let path = std::path::PathBuf::from(line.split(": ").nth(1).unwrap().trim());
    assert!(path.is_dir(), "retained workspace missing: {}", path.display());
    assert!(path.join("program").is_file());

    std::fs::remove_dir_all(&path).unwrap();
}

/// Without KEEP_TEMP, nothing is left behind in the temp root for this run.
#[cfg(unix)]
#[test]
fn workspace_is_removed_after_a_normal_run() {
    let temp = Project::empty();
    temp.tool(
        "gcc",
        concat!(
            "#!/bin/sh\n",
            "while [ \"$#\" -gt 0 ]; do\n",
            "  if [ \"$1\" = \"-o\" ]; then out=\"$2\"; fi\n",
            "  shift\n",
            "done\n",
            "pwd_of_out=$(dirname \"$out\")\n",
            "printf '%s\\n' \"$pwd_of_out\" >&2\n",
            "printf '#!/bin/sh\\nexit 0\\n' > \"$out\"\n",
            "chmod +x \"$out\"\n",
        ),
    );
    let file = temp.file("tidy.c", "int main(void) { return 0; }\n");

    let checked = cli()
        .env("PATH", temp.search_path())
        .arg(&file)
        .passes();

    // The stub compiler leaked the workspace path on stderr; it must be
    // gone once the process exits.
    let stderr = checked.stderr();
    let workspace = stderr
        .lines()
        .find(|line| line.contains("polyrun_"))
        .unwrap()
        .trim();
    assert!(!std::path::Path::new(workspace).exists());
}

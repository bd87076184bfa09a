// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-language run plans.
//!
//! Every variant follows one of three shapes: a bare interpreter step, a
//! single combined build-and-run step, or a compile step followed by an
//! execute step inside a workspace. The literal command templates live
//! here and nowhere else.

use crate::language::Language;
use crate::run::RunError;
use crate::steps::CommandStep;

use polyrun_core::{Workspace, WorkspaceError, WorkspaceLimiter};
use polyrun_exec::toolchain::{find_first, find_tool, resolve};

use std::fs;
use std::path::Path;

/// The ordered steps for one run attempt, plus the workspace that must
/// outlive them.
#[derive(Debug)]
pub(crate) struct Plan {
    pub(crate) steps: Vec<CommandStep>,
    pub(crate) workspace: Option<Workspace>,
}

impl Plan {
    fn bare(step: CommandStep) -> Self {
        Self {
            steps: vec![step],
            workspace: None,
        }
    }
}

pub(crate) fn plan(
    language: Language,
    source: &Path,
    limiter: &WorkspaceLimiter,
) -> Result<Plan, RunError> {
    match language {
        Language::C => compile_and_run(limiter, source, "gcc", "-std=c11 -Wall -Wextra -O2"),
        Language::Cpp => compile_and_run(limiter, source, "g++", "-std=c++17 -Wall -Wextra -O2"),
        Language::Rust => rust_plan(limiter, source),
        Language::Go => Ok(Plan::bare(CommandStep::combined(
            "go",
            format!("{} run {}", quoted_tool("go"), quoted(source)),
        ))),
        Language::Swift => Ok(Plan::bare(CommandStep::combined(
            "swift",
            format!("{} {}", quoted_tool("swift"), quoted(source)),
        ))),
        Language::Java => jvm_plan(limiter, source, "javac", "java"),
        Language::Kotlin => kotlin_plan(limiter, source),
        Language::Scala => jvm_plan(limiter, source, "scalac", "scala"),
        Language::CSharp => csharp_plan(limiter, source),
        Language::TypeScript => typescript_plan(limiter, source),
        Language::Python => Ok(interpreter(&["python3", "python"], source)),
        Language::JavaScript => Ok(interpreter(&["node"], source)),
        Language::Ruby => Ok(interpreter(&["ruby"], source)),
        Language::Php => Ok(interpreter(&["php"], source)),
        Language::Lua => Ok(interpreter(
            &["lua", "lua5.4", "lua5.3", "lua5.2", "lua5.1"],
            source,
        )),
        Language::Perl => Ok(interpreter(&["perl"], source)),
        Language::Shell => Ok(interpreter(&["bash", "sh"], source)),
    }
}

/// Quote a path for splicing into shell command text.
fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

/// Resolve a tool on the search path and quote it.
fn quoted_tool(name: &str) -> String {
    format!("\"{}\"", find_tool(name))
}

/// Derive a toolchain-facing name from the source file stem.
///
/// Toolchains like javac require the public class to match the file name;
/// a stem we cannot read means the run step could never find the class, so
/// fail the build loudly instead of papering over it.
fn derived_name(source: &Path, what: &str) -> Result<String, RunError> {
    source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| RunError::Compile {
            cause: format!("cannot derive {} from file name {}", what, source.display()),
            code: None,
        })
}

fn scaffold_error(context: &str, err: std::io::Error) -> RunError {
    RunError::Workspace(WorkspaceError::Io {
        context: context.to_string(),
        source: err,
    })
}

/// Pure interpreter: one execute step, no workspace.
fn interpreter(candidates: &[&str], source: &Path) -> Plan {
    let tool = find_first(candidates);
    let label = candidates.first().copied().unwrap_or("interpreter");
    Plan::bare(CommandStep::execute(
        label,
        format!("\"{}\" {}", tool, quoted(source)),
    ))
}

/// Native toolchain: compile into the workspace, then run the artifact.
fn compile_and_run(
    limiter: &WorkspaceLimiter,
    source: &Path,
    compiler: &str,
    flags: &str,
) -> Result<Plan, RunError> {
    let workspace = Workspace::create(limiter)?;
    let output = workspace
        .path()
        .join(format!("program{}", std::env::consts::EXE_SUFFIX));

    let compile = CommandStep::compile(
        compiler,
        format!(
            "{} {} -o {} {}",
            quoted_tool(compiler),
            quoted(source),
            quoted(&output),
            flags
        ),
    );
    let run = CommandStep::execute(compiler, quoted(&output));

    Ok(Plan {
        steps: vec![compile, run],
        workspace: Some(workspace),
    })
}

const RUST_MANIFEST: &str = "\
[package]
name = \"temp_rust_bin\"
version = \"0.1.0\"
edition = \"2021\"

[dependencies]

[profile.dev]
opt-level = 1

[profile.release]
opt-level = 2
";

/// Rust: scaffold a cargo project in the workspace, then build and run as
/// one combined step on the summed budget.
fn rust_plan(limiter: &WorkspaceLimiter, source: &Path) -> Result<Plan, RunError> {
    let workspace = Workspace::create(limiter)?;
    let root = workspace.path();

    let src_dir = root.join("src");
    fs::create_dir_all(&src_dir).map_err(|err| scaffold_error("failed to create src directory", err))?;

    let manifest = root.join("Cargo.toml");
    fs::write(&manifest, RUST_MANIFEST)
        .map_err(|err| scaffold_error("failed to create Cargo.toml", err))?;

    fs::copy(source, src_dir.join("main.rs"))
        .map_err(|err| scaffold_error("failed to copy source file", err))?;

    let step = CommandStep::combined(
        "cargo",
        format!(
            "{} run --quiet --manifest-path {} --release",
            quoted_tool("cargo"),
            quoted(&manifest)
        ),
    );

    Ok(Plan {
        steps: vec![step],
        workspace: Some(workspace),
    })
}

/// JVM-style toolchains that compile class files into the workspace and run
/// by class name (javac/java, scalac/scala).
fn jvm_plan(
    limiter: &WorkspaceLimiter,
    source: &Path,
    compiler: &str,
    runner: &str,
) -> Result<Plan, RunError> {
    let class = derived_name(source, "class name")?;
    let workspace = Workspace::create(limiter)?;

    let compile = CommandStep::compile(
        compiler,
        format!(
            "{} -d {} {}",
            quoted_tool(compiler),
            quoted(workspace.path()),
            quoted(source)
        ),
    );
    let run = CommandStep::execute(
        runner,
        format!(
            "{} -cp {} {}",
            quoted_tool(runner),
            quoted(workspace.path()),
            class
        ),
    );

    Ok(Plan {
        steps: vec![compile, run],
        workspace: Some(workspace),
    })
}

fn kotlin_plan(limiter: &WorkspaceLimiter, source: &Path) -> Result<Plan, RunError> {
    let workspace = Workspace::create(limiter)?;
    let jar = workspace.path().join("program.jar");

    let compile = CommandStep::compile(
        "kotlinc",
        format!(
            "{} {} -include-runtime -d {}",
            quoted_tool("kotlinc"),
            quoted(source),
            quoted(&jar)
        ),
    );
    let run = CommandStep::execute(
        "kotlin",
        format!("{} {}", quoted_tool("kotlin"), quoted(&jar)),
    );

    Ok(Plan {
        steps: vec![compile, run],
        workspace: Some(workspace),
    })
}

fn typescript_plan(limiter: &WorkspaceLimiter, source: &Path) -> Result<Plan, RunError> {
    let stem = derived_name(source, "output file name")?;
    let workspace = Workspace::create(limiter)?;
    let js_output = workspace.path().join(format!("{stem}.js"));

    let compile = CommandStep::compile(
        "tsc",
        format!(
            "{} {} --outDir {} --target ES2020 --module commonjs",
            quoted_tool("tsc"),
            quoted(source),
            quoted(workspace.path())
        ),
    );
    let run = CommandStep::execute(
        "node",
        format!("{} {}", quoted_tool("node"), quoted(&js_output)),
    );

    Ok(Plan {
        steps: vec![compile, run],
        workspace: Some(workspace),
    })
}

/// C#: first toolchain found wins (dotnet, then csc, then mcs); none found
/// is a hard error rather than a shell-resolution gamble.
fn csharp_plan(limiter: &WorkspaceLimiter, source: &Path) -> Result<Plan, RunError> {
    let found = ["dotnet", "csc", "mcs"]
        .iter()
        .find_map(|name| resolve(name).map(|path| (*name, path)));
    let Some((name, compiler)) = found else {
        return Err(RunError::ToolchainMissing {
            language: "C#",
            hint: "install the .NET SDK or Mono",
        });
    };

    let stem = derived_name(source, "output file name")?;
    let workspace = Workspace::create(limiter)?;
    let exe = workspace.path().join(format!("{stem}.exe"));

    let (compile, run) = if name == "dotnet" {
        (
            CommandStep::compile(
                name,
                format!(
                    "\"{}\" build {} -o {}",
                    compiler,
                    quoted(source),
                    quoted(workspace.path())
                ),
            ),
            CommandStep::execute(name, format!("\"{}\" {}", compiler, quoted(&exe))),
        )
    } else {
        let run_command = if cfg!(windows) {
            quoted(&exe)
        } else {
            format!("{} {}", quoted_tool("mono"), quoted(&exe))
        };
        (
            CommandStep::compile(
                name,
                format!("\"{}\" {} -out:{}", compiler, quoted(source), quoted(&exe)),
            ),
            CommandStep::execute(name, run_command),
        )
    };

    Ok(Plan {
        steps: vec![compile, run],
        workspace: Some(workspace),
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;

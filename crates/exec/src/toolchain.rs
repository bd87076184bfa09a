// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating toolchain binaries on the search path.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolve `name` to a concrete path by walking the `PATH` entries for a
/// regular file named `name` plus the platform executable suffix.
pub fn resolve(name: &str) -> Option<String> {
    resolve_in(name, std::env::var_os("PATH").as_deref())
}

/// Resolve `name` on the search path, falling back to the bare name so that
/// downstream shell resolution gets a final chance.
pub fn find_tool(name: &str) -> String {
    resolve(name).unwrap_or_else(|| name.to_string())
}

/// Try each candidate in order and return the first that resolves, or the
/// first candidate's bare name. The candidate list is a static per-variant
/// fallback (e.g. python3 then python), not a search algorithm.
pub fn find_first(candidates: &[&str]) -> String {
    find_first_in(candidates, std::env::var_os("PATH").as_deref())
}

fn resolve_in(name: &str, path: Option<&OsStr>) -> Option<String> {
    path.and_then(|path| lookup(name, path))
        .map(|found| found.display().to_string())
}

fn find_first_in(candidates: &[&str], path: Option<&OsStr>) -> String {
    candidates
        .iter()
        .find_map(|candidate| resolve_in(candidate, path))
        .unwrap_or_else(|| {
            candidates
                .first()
                .map(|candidate| candidate.to_string())
                .unwrap_or_default()
        })
}

fn lookup(name: &str, path: &OsStr) -> Option<PathBuf> {
    for dir in std::env::split_paths(path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
        if is_regular_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "toolchain_tests.rs"]
mod tests;

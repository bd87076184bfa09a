// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures and a small assertion DSL for the CLI specs.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Start building an invocation of the `polyrun` binary.
pub fn cli() -> Spec {
    let mut cmd = Command::cargo_bin("polyrun").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("KEEP_TEMP");
    Spec { cmd }
}

pub struct Spec {
    cmd: Command,
}

impl Spec {
    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().failure(),
        }
    }

    pub fn exits(mut self, code: i32) -> Checked {
        Checked {
            assert: self.cmd.assert().code(code),
        }
    }
}

pub struct Checked {
    assert: Assert,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        let output = self.assert.get_output();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains(needle),
            "stdout missing {needle:?}:\n{stdout}"
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let output = self.assert.get_output();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(needle),
            "stderr missing {needle:?}:\n{stderr}"
        );
        self
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stderr).into_owned()
    }
}

/// A temporary directory holding source files and stub tools for one spec.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a source file into the project and return its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Install an executable stub tool script into the project directory.
    #[cfg(unix)]
    pub fn tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.dir.path().join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// PATH value with this project's directory ahead of the current PATH,
    /// so stub tools shadow the real ones for a single child process.
    pub fn search_path(&self) -> std::ffi::OsString {
        let saved = std::env::var_os("PATH").unwrap_or_default();
        let mut entries = vec![self.dir.path().to_path_buf()];
        entries.extend(std::env::split_paths(&saved));
        std::env::join_paths(entries).unwrap()
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed set of supported languages and the extension table.

use std::fmt;

/// One supported language variant.
///
/// The set is fixed and closed; dispatch is a table lookup, not an open
/// registry. Each variant carries its literal command templates in
/// `plan.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
    Rust,
    Go,
    Swift,
    Java,
    Kotlin,
    Scala,
    CSharp,
    TypeScript,
    Python,
    JavaScript,
    Ruby,
    Php,
    Lua,
    Perl,
    Shell,
}

impl Language {
    /// Map a file extension (without the leading dot, any case) to a
    /// language. Unknown extensions map to `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Some(match ext.as_str() {
            "c" => Self::C,
            "cpp" | "cc" | "cxx" | "c++" => Self::Cpp,
            "rs" => Self::Rust,
            "go" => Self::Go,
            "swift" => Self::Swift,
            "java" => Self::Java,
            "kt" | "kts" => Self::Kotlin,
            "scala" => Self::Scala,
            "cs" => Self::CSharp,
            "js" | "mjs" => Self::JavaScript,
            "ts" => Self::TypeScript,
            "py" | "py3" => Self::Python,
            "rb" => Self::Ruby,
            "php" => Self::Php,
            "lua" => Self::Lua,
            "pl" | "pm" => Self::Perl,
            "sh" | "bash" => Self::Shell,
            _ => return None,
        })
    }

    /// Human-readable language name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Swift => "Swift",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Scala => "Scala",
            Self::CSharp => "C#",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript (Node.js)",
            Self::Ruby => "Ruby",
            Self::Php => "PHP",
            Self::Lua => "Lua",
            Self::Perl => "Perl",
            Self::Shell => "Bash/Shell",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input source-file validation.

use crate::config;
use crate::error::ValidateError;

use std::fs;
use std::path::Path;

/// Check the input is an existing, regular, readable file within the size cap.
pub fn validate_source_file(path: &Path) -> Result<(), ValidateError> {
    validate_with_limit(path, config::MAX_FILE_SIZE)
}

pub(crate) fn validate_with_limit(path: &Path, max_size: u64) -> Result<(), ValidateError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ValidateError::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(ValidateError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    if !meta.is_file() {
        return Err(ValidateError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    if meta.len() > max_size {
        return Err(ValidateError::TooLarge {
            size: meta.len(),
            max: max_size,
        });
    }

    fs::File::open(path).map_err(|err| ValidateError::Unreadable {
        path: path.to_path_buf(),
        source: err,
    })?;

    Ok(())
}

/// Lowercased file extension without the leading dot.
pub fn file_extension(path: &Path) -> Result<String, ValidateError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| ValidateError::MissingExtension {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;

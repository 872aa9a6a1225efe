//! File utilities for preset and convention data files.
//!
//! Preset, convention, and hierarchy files are YAML-compatible (JSON being a
//! subset of YAML, both spellings are accepted by the same reader).

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::errors::{NameForgeError, Result};

/// Read a data file and deserialize it into `T`.
///
/// Accepts YAML and JSON payloads. I/O failures and malformed content both
/// surface as errors carrying the file path; callers decide whether the
/// failure is soft or fatal.
pub fn read_data_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NameForgeError::io(format!("Failed to read data file: {}", path.display()), e)
    })?;

    serde_yaml::from_str(&content)
        .map_err(|e| NameForgeError::parse_in_file(format!("{e}"), path.display().to_string()))
}

/// File stem of `path` as an owned string, if representable as UTF-8.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

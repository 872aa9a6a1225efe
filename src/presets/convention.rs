//! Naming convention payloads.
//!
//! A convention is a rule set (tokens, patterns) governing how generated
//! names look for one category. The payload is carried as an opaque mapping:
//! the resolver only ever reads and writes its `"type"` field, everything
//! else belongs to whichever name generator consumes the convention.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::core::errors::{NameForgeError, Result};
use crate::core::file_utils;

/// Key within a convention payload holding its category tag.
pub const TYPE_KEY: &str = "type";

/// A single naming convention: an opaque rule mapping plus inheritance
/// metadata assigned during hierarchy resolution.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    /// Unique convention name (file stem of the origin file)
    pub name: String,
    /// File the convention was parsed from, if any
    pub file_path: Option<PathBuf>,
    /// Raw parsed payload; guaranteed to contain a `"type"` entry once the
    /// owning preset reference has been applied
    pub data: Mapping,
    /// Name of the convention unset fields fall back to; assigned during
    /// hierarchy resolution, `None` only for the `"global"` convention
    pub parent: Option<String>,
}

impl NamingConvention {
    /// Construct a convention from an already-parsed payload.
    pub fn new(name: impl Into<String>, data: Mapping) -> Self {
        Self {
            name: name.into(),
            file_path: None,
            data,
            parent: None,
        }
    }

    /// Parse a convention file. The convention name is the file stem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = file_utils::file_stem(path).ok_or_else(|| {
            NameForgeError::parse_in_file(
                "convention file has no usable file stem",
                path.display().to_string(),
            )
        })?;

        let value: Value = file_utils::read_data_file(path)?;
        let data = match value {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(NameForgeError::parse_in_file(
                    format!("convention payload must be a mapping, got {}", kind_of(&other)),
                    path.display().to_string(),
                ))
            }
        };

        debug!("loaded convention '{}' from {}", name, path.display());

        Ok(Self {
            name,
            file_path: Some(path.to_path_buf()),
            data,
            parent: None,
        })
    }

    /// Category tag declared in the payload, if any.
    pub fn convention_type(&self) -> Option<&str> {
        self.data.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Overwrite the payload's category tag. Preset-level declarations take
    /// precedence over whatever the raw convention file carries.
    pub fn set_convention_type(&mut self, convention_type: impl Into<String>) {
        self.data.insert(
            Value::String(TYPE_KEY.to_string()),
            Value::String(convention_type.into()),
        );
    }

    /// Raw payload field lookup, no parent fallback.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

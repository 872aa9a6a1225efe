//! Preset nodes and their convention declarations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A convention reference declared on a preset.
///
/// `resolved` is the key of the convention the reference points at once
/// hierarchy resolution has run; until then it is `None`. Equality is
/// defined by the `(name, type)` pair only, regardless of resolution state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameConventionData {
    /// Convention name (file stem of the convention file)
    pub name: String,
    /// Category tag, e.g. `"global"` or `"cinematics"`
    #[serde(rename = "type")]
    pub convention_type: String,
    /// Key of the resolved convention in the manager registry
    #[serde(skip)]
    pub resolved: Option<String>,
}

impl NameConventionData {
    /// Create an unresolved reference.
    pub fn new(name: impl Into<String>, convention_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            convention_type: convention_type.into(),
            resolved: None,
        }
    }
}

impl PartialEq for NameConventionData {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.convention_type == other.convention_type
    }
}

impl Eq for NameConventionData {}

/// On-disk representation of a preset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetFile {
    /// Unique preset name
    pub name: String,
    /// Convention references, declaration order significant
    #[serde(rename = "namingConventions", default)]
    pub naming_conventions: Vec<NameConventionData>,
}

/// A named node in the preset tree.
///
/// Parent and children are held as non-owning name keys into the manager's
/// registry rather than as object pointers; the manager maintains both sides
/// of the relation so hierarchy rewrites cannot leave dangling references.
#[derive(Debug, Clone)]
pub struct Preset {
    /// Unique preset name
    pub name: String,
    /// File the preset was parsed from (may no longer exist on disk)
    pub file_path: Option<PathBuf>,
    /// Name of the owning parent preset, `None` until resolution (or for
    /// the root)
    pub parent: Option<String>,
    /// Names of owned child presets, attachment order
    pub children: Vec<String>,
    /// Convention references declared directly on this preset
    pub conventions: Vec<NameConventionData>,
}

impl Preset {
    /// Create a detached preset with no declarations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: None,
            parent: None,
            children: Vec::new(),
            conventions: Vec::new(),
        }
    }

    /// Build a preset from its on-disk representation.
    pub fn from_file_data(data: PresetFile, file_path: PathBuf) -> Self {
        Self {
            name: data.name,
            file_path: Some(file_path),
            parent: None,
            children: Vec::new(),
            conventions: data.naming_conventions,
        }
    }

    /// First declared convention reference matching `convention_type`,
    /// declaration order preserved.
    pub fn convention_data_by_type(&self, convention_type: &str) -> Option<&NameConventionData> {
        self.conventions
            .iter()
            .find(|data| data.convention_type == convention_type)
    }

    /// First declared convention reference matching `name`.
    pub fn convention_data_by_name(&self, name: &str) -> Option<&NameConventionData> {
        self.conventions.iter().find(|data| data.name == name)
    }
}

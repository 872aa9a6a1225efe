//! Declarative preset hierarchy trees.
//!
//! A hierarchy file describes how presets inherit from one another,
//! independent of where the preset files sit on disk:
//!
//! ```yaml
//! name: Root
//! children:
//!   - name: Convergence
//!   - name: Features
//!     children:
//!       - name: FeaturesHero
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::core::file_utils;

/// One node of a declarative preset hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Preset name this node refers to
    pub name: String,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Create a leaf node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Load a hierarchy declaration from a YAML or JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        file_utils::read_data_file(path)
    }

    /// Depth-first iteration over all names in the tree.
    pub fn names(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str()];
        for child in &self.children {
            out.extend(child.names());
        }
        out
    }
}

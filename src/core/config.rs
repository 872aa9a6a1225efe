//! Configuration types for the naming preset system.
//!
//! [`NamingConfiguration`] carries the knobs the preset manager needs that
//! are deployment-specific: which file suffixes identify preset and
//! convention files, which directories to search when a referenced
//! convention does not sit next to its preset, and which preset acts as the
//! hierarchy root when no explicit hierarchy is supplied.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{NameForgeError, Result};

/// Name of the convention every other convention ultimately inherits from.
pub const GLOBAL_CONVENTION_NAME: &str = "global";

/// Configuration for preset and convention discovery and resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfiguration {
    /// Preset used as hierarchy root when no explicit hierarchy is given
    #[serde(default = "NamingConfiguration::default_preset_name_value")]
    pub default_preset_name: String,

    /// File extension (without dot) identifying preset files
    #[serde(default = "NamingConfiguration::default_preset_extension")]
    pub preset_extension: String,

    /// File extension (without dot) identifying convention files
    #[serde(default = "NamingConfiguration::default_convention_extension")]
    pub convention_extension: String,

    /// Directories searched for preset files by name
    #[serde(default)]
    pub preset_paths: Vec<PathBuf>,

    /// Directories searched for convention files that are not siblings of
    /// the preset that references them
    #[serde(default)]
    pub convention_paths: Vec<PathBuf>,
}

/// Default implementation for [`NamingConfiguration`].
impl Default for NamingConfiguration {
    fn default() -> Self {
        Self {
            default_preset_name: Self::default_preset_name_value(),
            preset_extension: Self::default_preset_extension(),
            convention_extension: Self::default_convention_extension(),
            preset_paths: Vec::new(),
            convention_paths: Vec::new(),
        }
    }
}

impl NamingConfiguration {
    /// Default root preset name.
    fn default_preset_name_value() -> String {
        "Default".to_string()
    }

    /// Default preset file extension.
    fn default_preset_extension() -> String {
        "npreset".to_string()
    }

    /// Default convention file extension.
    fn default_convention_extension() -> String {
        "nconvention".to_string()
    }

    /// Load configuration from a YAML (or JSON) file.
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            NameForgeError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            NameForgeError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.default_preset_name.trim().is_empty() {
            return Err(NameForgeError::validation_field(
                "default preset name must not be empty",
                "default_preset_name",
            ));
        }

        for (field, extension) in [
            ("preset_extension", &self.preset_extension),
            ("convention_extension", &self.convention_extension),
        ] {
            if extension.trim().is_empty() {
                return Err(NameForgeError::validation_field(
                    "file extension must not be empty",
                    field,
                ));
            }
            if extension.starts_with('.') {
                return Err(NameForgeError::validation_field(
                    "file extension must not include the leading dot",
                    field,
                ));
            }
        }

        if self.preset_extension == self.convention_extension {
            return Err(NameForgeError::validation(
                "preset and convention files must use distinct extensions",
            ));
        }

        Ok(())
    }

    /// Find a preset file by name in the configured preset search paths.
    pub fn find_preset_file(&self, name: &str) -> Option<PathBuf> {
        find_in_paths(&self.preset_paths, name, &self.preset_extension)
    }

    /// Find a convention file by name in the configured convention search
    /// paths.
    pub fn find_convention_file(&self, name: &str) -> Option<PathBuf> {
        find_in_paths(&self.convention_paths, name, &self.convention_extension)
    }

    /// File name a convention called `name` is expected to have on disk.
    pub fn convention_file_name(&self, name: &str) -> String {
        format!("{name}.{}", self.convention_extension)
    }
}

/// Search `paths` in order for `<name>.<extension>`, first hit wins.
fn find_in_paths(paths: &[PathBuf], name: &str, extension: &str) -> Option<PathBuf> {
    paths.iter().find_map(|dir| {
        let candidate = dir.join(format!("{name}.{extension}"));
        candidate.is_file().then_some(candidate)
    })
}

/// Check whether a path carries the given extension (without dot).
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates_successfully() {
        NamingConfiguration::default()
            .validate()
            .expect("default config");
    }

    #[test]
    fn rejects_empty_default_preset_name() {
        let mut config = NamingConfiguration::default();
        config.default_preset_name = "  ".into();
        let err = config.validate().expect_err("expected validation failure");
        assert!(matches!(err, NameForgeError::Validation { .. }));
    }

    #[test]
    fn rejects_dotted_extension() {
        let mut config = NamingConfiguration::default();
        config.preset_extension = ".npreset".into();
        let err = config.validate().expect_err("expected validation failure");
        assert!(
            format!("{err}").contains("leading dot"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn rejects_identical_extensions() {
        let mut config = NamingConfiguration::default();
        config.convention_extension = config.preset_extension.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(matches_extension(Path::new("a/b/Default.NPRESET"), "npreset"));
        assert!(!matches_extension(Path::new("a/b/Default.yaml"), "npreset"));
        assert!(!matches_extension(Path::new("a/b/noext"), "npreset"));
    }
}

//! # Nameforge-RS: Naming Preset & Convention Resolver
//!
//! A Rust implementation of the naming preset system used by DCC pipeline
//! tooling. Presets group naming-convention assignments for categories such
//! as `"global"` or `"cinematics"`, and inherit from one another through a
//! declarative hierarchy that is resolved at load time:
//!
//! - **Presets**: named configuration bundles loaded from JSON/YAML files
//! - **Conventions**: opaque rule sets referenced by presets, inheriting
//!   unset fields from a parent convention
//! - **Hierarchy resolution**: a best-effort pass that assigns parent/child
//!   links so that every preset chain terminates at a single root and every
//!   convention chain terminates at the `"global"` convention
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nameforge_rs::{NamingConfiguration, PresetsManager};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NamingConfiguration::default();
//!     let mut manager = PresetsManager::new(config);
//!     manager.load_presets_from_directory("./presets", None)?;
//!
//!     let convention = manager
//!         .find_convention_by_type("Convergence", "cinematics", true)?;
//!     println!("cinematics resolves to {}", convention.name);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core infrastructure modules
pub mod core {
    //! Configuration, error handling, and file utilities.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
}

// Preset and convention domain modules
pub mod presets {
    //! Preset, convention, and hierarchy resolution.

    pub mod convention;
    pub mod hierarchy;
    pub mod manager;
    pub mod preset;
}

// Re-export primary types for convenience
pub use crate::core::config::NamingConfiguration;
pub use crate::core::errors::{NameForgeError, Result, ResultExt};
pub use presets::convention::NamingConvention;
pub use presets::hierarchy::HierarchyNode;
pub use presets::manager::PresetsManager;
pub use presets::preset::{NameConventionData, Preset};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

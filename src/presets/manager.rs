//! Preset registry and hierarchy resolution.
//!
//! [`PresetsManager`] owns every loaded [`Preset`] and [`NamingConvention`]
//! and runs the resolution pass that turns a flat collection of presets plus
//! an optional declarative hierarchy into a tree: every preset chain
//! terminates at a single root, every convention chain terminates at the
//! `"global"` convention.
//!
//! Resolution is best-effort at the reference level. Hierarchy files are
//! maintainer-edited and a stale name must not abort the whole load, so
//! dangling preset or convention references are logged and skipped. A
//! missing `"global"` convention has no recovery strategy and is a hard
//! error.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::config::{matches_extension, NamingConfiguration, GLOBAL_CONVENTION_NAME};
use crate::core::errors::{NameForgeError, Result};
use crate::core::file_utils;
use crate::presets::convention::NamingConvention;
use crate::presets::hierarchy::HierarchyNode;
use crate::presets::preset::{NameConventionData, Preset, PresetFile};

/// Process-scoped registry of presets and naming conventions.
///
/// All mutation goes through `&mut self`; the manager is built, loaded, and
/// queried from a single owner (a one-shot load phase at tool startup).
#[derive(Debug)]
pub struct PresetsManager {
    config: NamingConfiguration,
    presets: IndexMap<String, Preset>,
    conventions: IndexMap<String, NamingConvention>,
    root: Option<String>,
}

impl PresetsManager {
    /// Create an empty manager with the given configuration.
    pub fn new(config: NamingConfiguration) -> Self {
        Self {
            config,
            presets: IndexMap::new(),
            conventions: IndexMap::new(),
            root: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &NamingConfiguration {
        &self.config
    }

    /// All loaded presets, registration order.
    pub fn presets(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    /// Look up a preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Root preset assigned by the last resolution pass, if any.
    pub fn root_preset(&self) -> Option<&Preset> {
        self.root.as_deref().and_then(|name| self.presets.get(name))
    }

    /// All registered conventions, registration order.
    pub fn conventions(&self) -> impl Iterator<Item = &NamingConvention> {
        self.conventions.values()
    }

    /// Look up a convention by name.
    pub fn convention(&self, name: &str) -> Option<&NamingConvention> {
        self.conventions.get(name)
    }

    /// Register a preset directly. An already-registered preset with the
    /// same name is replaced.
    pub fn add_preset(&mut self, preset: Preset) {
        if self.presets.contains_key(&preset.name) {
            warn!("preset '{}' is already registered; replacing it", preset.name);
        }
        self.presets.insert(preset.name.clone(), preset);
    }

    /// Register a convention. First registration wins: a convention that is
    /// already present keeps its payload and its position in registration
    /// order, so earlier resolutions stay stable.
    pub fn register_convention(&mut self, convention: NamingConvention) {
        if self.conventions.contains_key(&convention.name) {
            debug!(
                "convention '{}' is already registered; keeping first registration",
                convention.name
            );
            return;
        }
        self.conventions.insert(convention.name.clone(), convention);
    }

    /// Remove a preset from the registry.
    ///
    /// The preset's children are reparented to its parent (or detached when
    /// it had none). Deleting the file on disk is the caller's business.
    pub fn delete_preset(&mut self, name: &str) -> bool {
        let Some(removed) = self.presets.shift_remove(name) else {
            return false;
        };

        if let Some(parent) = removed.parent.as_deref() {
            if let Some(parent_preset) = self.presets.get_mut(parent) {
                parent_preset.children.retain(|child| child != name);
            }
        }
        for child in &removed.children {
            self.set_parent(child, removed.parent.as_deref());
        }
        if self.root.as_deref() == Some(name) {
            self.root = None;
        }

        info!("deleted preset '{name}' from registry");
        true
    }

    // ------------------------------------------------------------------
    // File-backed loading
    // ------------------------------------------------------------------

    /// Load a single preset file and register it together with the
    /// convention files it references.
    ///
    /// Soft on every failure: a wrong extension, an unparseable payload, or
    /// a missing convention file logs the problem and the load continues
    /// (returning `false` for the two former cases). Convention entries are
    /// independent; one missing file does not stop the others.
    pub fn load_preset_from_file(&mut self, path: &Path) -> bool {
        if !matches_extension(path, &self.config.preset_extension) {
            debug!("skipping non-preset file {}", path.display());
            return false;
        }

        let data: PresetFile = match file_utils::read_data_file(path) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to parse preset file {}: {err}", path.display());
                return false;
            }
        };

        let preset = Preset::from_file_data(data, path.to_path_buf());
        debug!("loaded preset '{}' from {}", preset.name, path.display());

        for entry in &preset.conventions {
            self.load_convention_for_entry(entry, path.parent());
        }

        self.add_preset(preset);
        true
    }

    /// Load a preset by name through the configured preset search paths.
    pub fn load_preset_by_name(&mut self, name: &str) -> bool {
        match self.config.find_preset_file(name) {
            Some(path) => self.load_preset_from_file(&path),
            None => {
                warn!("no preset file found for '{name}' in configured preset paths");
                false
            }
        }
    }

    /// Recursively load every preset file under `directory`, then run one
    /// hierarchy resolution pass over everything loaded.
    pub fn load_presets_from_directory(
        &mut self,
        directory: impl AsRef<Path>,
        hierarchy: Option<&HierarchyNode>,
    ) -> Result<()> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(NameForgeError::validation(format!(
                "preset directory does not exist: {}",
                directory.display()
            )));
        }

        let mut loaded = 0usize;
        for entry in WalkDir::new(directory)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if entry.file_type().is_file() && self.load_preset_from_file(entry.path()) {
                loaded += 1;
            }
        }
        info!("loaded {loaded} presets from {}", directory.display());

        self.resolve_hierarchy(hierarchy)
    }

    /// Resolve the convention file referenced by one preset entry: sibling
    /// location first, configured convention search paths second.
    fn load_convention_for_entry(&mut self, entry: &NameConventionData, preset_dir: Option<&Path>) {
        if self.conventions.contains_key(&entry.name) {
            return;
        }

        let sibling = preset_dir.map(|dir| dir.join(self.config.convention_file_name(&entry.name)));
        let convention_path: Option<PathBuf> = match sibling {
            Some(path) if path.is_file() => Some(path),
            _ => self.config.find_convention_file(&entry.name),
        };

        let Some(convention_path) = convention_path else {
            warn!(
                "convention file for '{}' (type '{}') not found next to its preset or in any \
                 configured convention path; skipping",
                entry.name, entry.convention_type
            );
            return;
        };

        match NamingConvention::from_path(&convention_path) {
            Ok(mut convention) => {
                // The preset-level type declaration takes precedence over the
                // type the convention file declares for itself.
                convention.set_convention_type(&entry.convention_type);
                self.register_convention(convention);
            }
            Err(err) => {
                warn!(
                    "failed to load convention file {}: {err}",
                    convention_path.display()
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Hierarchy resolution
    // ------------------------------------------------------------------

    /// Assign parent/child links across all loaded presets and conventions.
    ///
    /// `data` is either an explicit hierarchy tree or `None`, in which case
    /// the configured default preset name is the root. After this pass every
    /// preset's parent chain terminates at the root and every convention's
    /// parent chain terminates at `"global"`. Re-running with the same
    /// inputs is idempotent.
    pub fn resolve_hierarchy(&mut self, data: Option<&HierarchyNode>) -> Result<()> {
        let root_name = match data {
            Some(node) => node.name.clone(),
            None => self.config.default_preset_name.clone(),
        };

        if !self.presets.contains_key(&root_name) {
            warn!("root preset '{root_name}' is not loaded; hierarchy left unresolved");
            self.root = None;
            return Ok(());
        }
        self.root = Some(root_name.clone());

        match data {
            Some(node) => self.attach_node(node, None)?,
            None => {
                self.set_parent(&root_name, None);
                self.resolve_preset_conventions(&root_name)?;
            }
        }

        // Orphan sweep: presets the hierarchy never mentioned hang off the
        // root so no parent chain dangles.
        let orphans: Vec<String> = self
            .presets
            .iter()
            .filter(|(name, preset)| preset.parent.is_none() && *name != &root_name)
            .map(|(name, _)| name.clone())
            .collect();
        for orphan in orphans {
            debug!("preset '{orphan}' is not part of the hierarchy; parenting to '{root_name}'");
            self.set_parent(&orphan, Some(&root_name));
            self.resolve_preset_conventions(&orphan)?;
        }

        self.sweep_convention_parents()?;

        info!(
            "hierarchy resolved: root '{root_name}', {} presets, {} conventions",
            self.presets.len(),
            self.conventions.len()
        );
        Ok(())
    }

    /// Depth-first walk of one hierarchy node. Unknown preset names skip the
    /// whole branch.
    fn attach_node(&mut self, node: &HierarchyNode, parent: Option<&str>) -> Result<()> {
        if !self.presets.contains_key(&node.name) {
            warn!(
                "hierarchy references preset '{}' which is not loaded; skipping branch",
                node.name
            );
            return Ok(());
        }

        self.set_parent(&node.name, parent);
        self.resolve_preset_conventions(&node.name)?;

        for child in &node.children {
            self.attach_node(child, Some(&node.name))?;
        }
        Ok(())
    }

    /// Point `child` at a new parent, maintaining both sides of the
    /// relation: the child leaves its old parent's child list first, and a
    /// child is never appended twice.
    fn set_parent(&mut self, child: &str, parent: Option<&str>) {
        if parent == Some(child) {
            warn!("preset '{child}' cannot be its own parent; ignoring");
            return;
        }

        let old_parent = self.presets.get(child).and_then(|p| p.parent.clone());
        if let Some(old) = old_parent {
            if let Some(old_preset) = self.presets.get_mut(&old) {
                old_preset.children.retain(|name| name != child);
            }
        }

        if let Some(child_preset) = self.presets.get_mut(child) {
            child_preset.parent = parent.map(str::to_string);
        }

        if let Some(parent_name) = parent {
            if let Some(parent_preset) = self.presets.get_mut(parent_name) {
                if !parent_preset.children.iter().any(|name| name == child) {
                    parent_preset.children.push(child.to_string());
                }
            }
        }
    }

    /// Resolve every convention reference declared on `preset_name` and
    /// assign inheritance parents to the referenced conventions.
    fn resolve_preset_conventions(&mut self, preset_name: &str) -> Result<()> {
        let Some(preset) = self.presets.get(preset_name) else {
            return Ok(());
        };
        let entries = preset.conventions.clone();
        let parent_preset = preset.parent.clone();

        let mut resolved_entries = Vec::with_capacity(entries.len());
        for mut entry in entries {
            let convention_key = if self.conventions.contains_key(&entry.name) {
                entry.name.clone()
            } else {
                warn!(
                    "preset '{preset_name}' references unknown convention '{}'; \
                     falling back to '{GLOBAL_CONVENTION_NAME}'",
                    entry.name
                );
                self.require_global()?;
                GLOBAL_CONVENTION_NAME.to_string()
            };

            // Inheritance parent: global-typed conventions stay parentless
            // here (the final sweep links them to "global"); everything else
            // inherits from the parent preset's convention of the same type.
            if entry.convention_type != GLOBAL_CONVENTION_NAME
                && convention_key != GLOBAL_CONVENTION_NAME
            {
                let parent_key = match parent_preset.as_deref() {
                    Some(parent) => Some(
                        self.find_convention_by_type(parent, &entry.convention_type, true)?
                            .name
                            .clone(),
                    ),
                    None => self
                        .find_conventions_by_type(&entry.convention_type)
                        .first()
                        .map(|convention| convention.name.clone()),
                };
                let parent_key = parent_key.filter(|key| key != &convention_key);
                if let Some(parent_key) = parent_key {
                    if let Some(convention) = self.conventions.get_mut(&convention_key) {
                        convention.parent = Some(parent_key);
                    }
                }
            }

            entry.resolved = Some(convention_key);
            resolved_entries.push(entry);
        }

        if let Some(preset) = self.presets.get_mut(preset_name) {
            preset.conventions = resolved_entries;
        }
        Ok(())
    }

    /// Link every parentless convention except `"global"` itself to the
    /// global convention.
    fn sweep_convention_parents(&mut self) -> Result<()> {
        let needs_global = self
            .conventions
            .iter()
            .any(|(name, c)| name.as_str() != GLOBAL_CONVENTION_NAME && c.parent.is_none());
        if needs_global {
            self.require_global()?;
        }

        for (name, convention) in &mut self.conventions {
            if name.as_str() != GLOBAL_CONVENTION_NAME && convention.parent.is_none() {
                convention.parent = Some(GLOBAL_CONVENTION_NAME.to_string());
            }
        }
        Ok(())
    }

    /// The `"global"` convention is a load-bearing precondition; there is no
    /// recovery when it is missing.
    fn require_global(&self) -> Result<()> {
        if self.conventions.contains_key(GLOBAL_CONVENTION_NAME) {
            Ok(())
        } else {
            Err(NameForgeError::config(format!(
                "no '{GLOBAL_CONVENTION_NAME}' convention is registered; \
                 cannot resolve convention fallbacks"
            )))
        }
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Find the convention reference for a category, with inheritance.
    ///
    /// Searches the preset's own declarations first (declaration order
    /// wins), then the parent chain when `recursive`. A root preset that
    /// still has no match falls back to a manager-wide search over every
    /// registered convention's raw type field, first match in registration
    /// order, wrapped as a synthetic reference. Returns `None` when nothing
    /// matches anywhere or the preset is unknown.
    pub fn find_convention_data_by_type(
        &self,
        preset_name: &str,
        convention_type: &str,
        recursive: bool,
    ) -> Option<NameConventionData> {
        let preset = self.presets.get(preset_name)?;

        if let Some(data) = preset.convention_data_by_type(convention_type) {
            return Some(data.clone());
        }

        match preset.parent.as_deref() {
            Some(parent) if recursive => {
                self.find_convention_data_by_type(parent, convention_type, recursive)
            }
            Some(_) => None,
            None => self
                .find_conventions_by_type(convention_type)
                .first()
                .map(|convention| {
                    let mut data = NameConventionData::new(&convention.name, convention_type);
                    data.resolved = Some(convention.name.clone());
                    data
                }),
        }
    }

    /// Find the convention that applies for a category under a preset.
    ///
    /// Never comes back empty while a `"global"` convention is registered:
    /// any miss in [`Self::find_convention_data_by_type`] falls back to the
    /// global convention. A missing global convention is a hard error.
    pub fn find_convention_by_type(
        &self,
        preset_name: &str,
        convention_type: &str,
        recursive: bool,
    ) -> Result<&NamingConvention> {
        let key = match self.find_convention_data_by_type(preset_name, convention_type, recursive) {
            Some(data) => {
                let key = data.resolved.unwrap_or(data.name);
                if self.conventions.contains_key(&key) {
                    key
                } else {
                    GLOBAL_CONVENTION_NAME.to_string()
                }
            }
            None => GLOBAL_CONVENTION_NAME.to_string(),
        };

        if key == GLOBAL_CONVENTION_NAME {
            self.require_global()?;
        }
        self.conventions.get(&key).ok_or_else(|| {
            NameForgeError::internal(format!("convention registry lost key '{key}'"))
        })
    }

    /// Find a convention by its own name: the preset's declarations first,
    /// then the parent chain, then (at the root) the whole registry. No
    /// global fallback; may legitimately return `None`.
    pub fn find_convention_by_name(
        &self,
        preset_name: &str,
        name: &str,
        recursive: bool,
    ) -> Option<&NamingConvention> {
        let preset = self.presets.get(preset_name)?;

        if preset.convention_data_by_name(name).is_some() {
            return self.conventions.get(name);
        }

        match preset.parent.as_deref() {
            Some(parent) if recursive => self.find_convention_by_name(parent, name, recursive),
            Some(_) => None,
            None => self.conventions.get(name),
        }
    }

    /// Every registered convention whose raw `"type"` field matches,
    /// registration order.
    pub fn find_conventions_by_type(&self, convention_type: &str) -> Vec<&NamingConvention> {
        self.conventions
            .values()
            .filter(|convention| convention.convention_type() == Some(convention_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn convention(name: &str, convention_type: &str) -> NamingConvention {
        let mut convention = NamingConvention::new(name, Mapping::new());
        convention.set_convention_type(convention_type);
        convention
    }

    fn preset_with(name: &str, entries: &[(&str, &str)]) -> Preset {
        let mut preset = Preset::new(name);
        preset.conventions = entries
            .iter()
            .map(|(n, t)| NameConventionData::new(*n, *t))
            .collect();
        preset
    }

    /// Root with a global convention, one child with a cinematics
    /// convention, one preset outside the hierarchy.
    fn loaded_manager() -> PresetsManager {
        let mut manager = PresetsManager::new(NamingConfiguration::default());
        manager.register_convention(convention("global", "global"));
        manager.register_convention(convention("cinematicsNaming", "cinematics"));
        manager.add_preset(preset_with("Root", &[("global", "global")]));
        manager.add_preset(preset_with("Convergence", &[("cinematicsNaming", "cinematics")]));
        manager.add_preset(preset_with("Stray", &[]));
        manager
    }

    fn hierarchy() -> HierarchyNode {
        HierarchyNode {
            name: "Root".into(),
            children: vec![HierarchyNode::new("Convergence")],
        }
    }

    #[test]
    fn resolution_assigns_root_and_parents() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        assert_eq!(manager.root_preset().map(|p| p.name.as_str()), Some("Root"));
        assert_eq!(
            manager.preset("Convergence").and_then(|p| p.parent.as_deref()),
            Some("Root")
        );
        // Stray was never in the hierarchy; the sweep parents it to the root.
        assert_eq!(
            manager.preset("Stray").and_then(|p| p.parent.as_deref()),
            Some("Root")
        );
    }

    #[test]
    fn resolution_without_hierarchy_uses_default_preset_name() {
        let mut config = NamingConfiguration::default();
        config.default_preset_name = "Root".into();
        let mut manager = PresetsManager::new(config);
        manager.register_convention(convention("global", "global"));
        manager.add_preset(preset_with("Root", &[("global", "global")]));
        manager.add_preset(preset_with("Convergence", &[]));

        manager.resolve_hierarchy(None).expect("resolve");

        assert_eq!(manager.root_preset().map(|p| p.name.as_str()), Some("Root"));
        for preset in manager.presets() {
            assert!(
                preset.parent.is_some() || preset.name == "Root",
                "preset '{}' has no parent",
                preset.name
            );
        }
    }

    #[test]
    fn unknown_root_leaves_hierarchy_unresolved() {
        let mut manager = loaded_manager();
        let missing = HierarchyNode::new("DoesNotExist");
        manager.resolve_hierarchy(Some(&missing)).expect("resolve");
        assert!(manager.root_preset().is_none());
    }

    #[test]
    fn unknown_child_branch_is_skipped_without_error() {
        let mut manager = loaded_manager();
        let mut tree = hierarchy();
        tree.children.push(HierarchyNode {
            name: "NeverLoaded".into(),
            children: vec![HierarchyNode::new("Convergence")],
        });

        manager.resolve_hierarchy(Some(&tree)).expect("resolve");

        // The unknown branch vanished; Convergence kept its position from
        // the first branch.
        let root_children = &manager.preset("Root").expect("root").children;
        assert!(!root_children.iter().any(|c| c == "NeverLoaded"));
        assert_eq!(
            manager.preset("Convergence").and_then(|p| p.parent.as_deref()),
            Some("Root")
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("first");
        manager.resolve_hierarchy(Some(&hierarchy())).expect("second");

        let root = manager.preset("Root").expect("root");
        let convergence_count = root.children.iter().filter(|c| *c == "Convergence").count();
        assert_eq!(convergence_count, 1, "duplicate child entry after re-resolution");
        let stray_count = root.children.iter().filter(|c| *c == "Stray").count();
        assert_eq!(stray_count, 1);
    }

    #[test]
    fn conventions_inherit_down_to_global() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        for convention in manager.conventions() {
            assert!(
                convention.parent.is_some() || convention.name == "global",
                "convention '{}' has no parent",
                convention.name
            );
        }
        assert_eq!(
            manager.convention("cinematicsNaming").and_then(|c| c.parent.as_deref()),
            Some("global")
        );
    }

    #[test]
    fn child_convention_inherits_parent_convention_of_same_type() {
        let mut manager = PresetsManager::new(NamingConfiguration::default());
        manager.register_convention(convention("global", "global"));
        manager.register_convention(convention("cinematicsNaming", "cinematics"));
        manager.register_convention(convention("heroCinematics", "cinematics"));
        manager.add_preset(preset_with("Root", &[("cinematicsNaming", "cinematics")]));
        manager.add_preset(preset_with("Hero", &[("heroCinematics", "cinematics")]));

        let tree = HierarchyNode {
            name: "Root".into(),
            children: vec![HierarchyNode::new("Hero")],
        };
        manager.resolve_hierarchy(Some(&tree)).expect("resolve");

        assert_eq!(
            manager.convention("heroCinematics").and_then(|c| c.parent.as_deref()),
            Some("cinematicsNaming")
        );
    }

    #[test]
    fn find_by_type_walks_the_parent_chain() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        // Stray declares nothing; its parent (Root) declares only global,
        // and the manager-wide search finds the cinematics convention.
        let found = manager
            .find_convention_by_type("Stray", "cinematics", true)
            .expect("lookup");
        assert_eq!(found.name, "cinematicsNaming");
    }

    #[test]
    fn find_by_type_falls_back_to_global_for_unknown_category() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        let found = manager
            .find_convention_by_type("Convergence", "modeling", true)
            .expect("lookup");
        assert_eq!(found.name, "global");
    }

    #[test]
    fn find_by_type_without_global_is_fatal() {
        let mut manager = PresetsManager::new(NamingConfiguration::default());
        manager.register_convention(convention("cinematicsNaming", "cinematics"));
        manager.add_preset(preset_with("Root", &[]));

        let err = manager
            .find_convention_by_type("Root", "modeling", true)
            .expect_err("expected missing-global failure");
        assert!(matches!(err, NameForgeError::Config { .. }));
    }

    #[test]
    fn resolution_with_dangling_reference_and_no_global_is_fatal() {
        let mut manager = PresetsManager::new(NamingConfiguration::default());
        manager.add_preset(preset_with("Root", &[("ghost", "cinematics")]));

        let err = manager
            .resolve_hierarchy(Some(&HierarchyNode::new("Root")))
            .expect_err("expected missing-global failure");
        assert!(matches!(err, NameForgeError::Config { .. }));
    }

    #[test]
    fn find_by_name_has_no_global_fallback() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        assert!(manager
            .find_convention_by_name("Convergence", "cinematicsNaming", true)
            .is_some());
        assert!(manager
            .find_convention_by_name("Convergence", "doesNotExist", true)
            .is_none());
    }

    #[test]
    fn non_recursive_lookup_stops_at_the_preset() {
        let mut manager = loaded_manager();
        manager.resolve_hierarchy(Some(&hierarchy())).expect("resolve");

        // Convergence only declares cinematics; without recursion the
        // global declaration on Root is out of reach.
        assert!(manager
            .find_convention_data_by_type("Convergence", "global", false)
            .is_none());
        assert!(manager
            .find_convention_data_by_type("Convergence", "global", true)
            .is_some());
    }

    #[test]
    fn delete_preset_reparents_children() {
        let mut manager = loaded_manager();
        manager.add_preset(preset_with("Leaf", &[]));
        let tree = HierarchyNode {
            name: "Root".into(),
            children: vec![HierarchyNode {
                name: "Convergence".into(),
                children: vec![HierarchyNode::new("Leaf")],
            }],
        };
        manager.resolve_hierarchy(Some(&tree)).expect("resolve");

        assert!(manager.delete_preset("Convergence"));
        assert!(manager.preset("Convergence").is_none());
        assert_eq!(
            manager.preset("Leaf").and_then(|p| p.parent.as_deref()),
            Some("Root")
        );
        assert!(!manager
            .preset("Root")
            .expect("root")
            .children
            .iter()
            .any(|c| c == "Convergence"));
        assert!(!manager.delete_preset("Convergence"));
    }

    #[test]
    fn manager_wide_type_search_is_registration_order() {
        let mut manager = PresetsManager::new(NamingConfiguration::default());
        manager.register_convention(convention("global", "global"));
        manager.register_convention(convention("firstCinematics", "cinematics"));
        manager.register_convention(convention("secondCinematics", "cinematics"));
        manager.add_preset(preset_with("Root", &[]));
        manager.resolve_hierarchy(Some(&HierarchyNode::new("Root"))).expect("resolve");

        let matches = manager.find_conventions_by_type("cinematics");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "firstCinematics");

        let found = manager
            .find_convention_by_type("Root", "cinematics", true)
            .expect("lookup");
        assert_eq!(found.name, "firstCinematics");
    }
}

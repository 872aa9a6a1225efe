//! Command implementations for the nameforge CLI.

use anyhow::Context;
use console::style;

use nameforge_rs::{HierarchyNode, NamingConfiguration, Preset, PresetsManager};

use super::args::{LoadArgs, ResolveArgs, TreeArgs, ValidateConfigArgs};

/// Build a manager from the load arguments: configuration, optional
/// hierarchy declaration, and one directory load + resolution pass.
fn load_manager(args: &LoadArgs) -> anyhow::Result<PresetsManager> {
    let config = match &args.config {
        Some(path) => NamingConfiguration::from_yaml_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => NamingConfiguration::default(),
    };
    config.validate().context("validating configuration")?;

    let hierarchy = match &args.hierarchy {
        Some(path) => Some(
            HierarchyNode::from_path(path)
                .with_context(|| format!("loading hierarchy from {}", path.display()))?,
        ),
        None => None,
    };

    let mut manager = PresetsManager::new(config);
    manager
        .load_presets_from_directory(&args.directory, hierarchy.as_ref())
        .with_context(|| format!("loading presets from {}", args.directory.display()))?;
    Ok(manager)
}

/// Print the resolved preset hierarchy.
pub fn tree_command(args: TreeArgs) -> anyhow::Result<()> {
    let manager = load_manager(&args.load)?;

    match manager.root_preset() {
        Some(root) => {
            print_subtree(&manager, root, 0, args.conventions);
        }
        None => {
            println!(
                "{}",
                style("hierarchy unresolved; loaded presets:").yellow().bold()
            );
            for preset in manager.presets() {
                println!("  {}", preset.name);
            }
        }
    }

    println!(
        "\n{} presets, {} conventions",
        style(manager.presets().count()).cyan(),
        style(manager.conventions().count()).cyan()
    );
    Ok(())
}

fn print_subtree(manager: &PresetsManager, preset: &Preset, depth: usize, conventions: bool) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}", style(&preset.name).green().bold());

    if conventions {
        for data in &preset.conventions {
            let resolved = data.resolved.as_deref().unwrap_or("<unresolved>");
            println!(
                "{indent}  {} {} -> {}",
                style(&data.convention_type).dim(),
                data.name,
                resolved
            );
        }
    }

    for child in &preset.children {
        if let Some(child_preset) = manager.preset(child) {
            print_subtree(manager, child_preset, depth + 1, conventions);
        }
    }
}

/// Resolve and print the convention for one category under one preset.
pub fn resolve_command(args: ResolveArgs) -> anyhow::Result<()> {
    let manager = load_manager(&args.load)?;

    if manager.preset(&args.preset).is_none() {
        anyhow::bail!("preset '{}' is not loaded", args.preset);
    }

    let convention = manager
        .find_convention_by_type(&args.preset, &args.convention_type, true)
        .with_context(|| {
            format!(
                "resolving '{}' under preset '{}'",
                args.convention_type, args.preset
            )
        })?;

    println!(
        "{} {} {}",
        style(&args.convention_type).dim(),
        style("->").dim(),
        style(&convention.name).green().bold()
    );
    if let Some(parent) = &convention.parent {
        println!("inherits from {}", style(parent).cyan());
    }
    Ok(())
}

/// Validate a naming configuration file.
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    let config = NamingConfiguration::from_yaml_file(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    config.validate()?;

    println!(
        "{} {}",
        style("valid:").green().bold(),
        args.config.display()
    );
    Ok(())
}

/// Print the default configuration as YAML.
pub fn print_default_config() -> anyhow::Result<()> {
    let config = NamingConfiguration::default();
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

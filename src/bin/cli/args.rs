//! CLI argument structures for the nameforge binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Naming Preset & Convention Inspector
#[derive(Parser)]
#[command(name = "nameforge")]
#[command(version = VERSION)]
#[command(about = "Naming preset & convention hierarchy inspector")]
#[command(long_about = "
Load naming preset directories the way pipeline tools do at startup and
inspect the result.

Common Usage:

  # Print the resolved preset tree for a directory
  nameforge tree ./presets

  # Resolve against an explicit hierarchy declaration
  nameforge tree ./presets --hierarchy hierarchy.yaml

  # Which convention applies for a category under a preset?
  nameforge resolve ./presets Convergence cinematics

  # Validate a naming configuration file
  nameforge validate-config naming.yaml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Load a preset directory and print the resolved hierarchy
    Tree(TreeArgs),
    /// Resolve the convention for a category under a preset
    Resolve(ResolveArgs),
    /// Validate a naming configuration file
    ValidateConfig(ValidateConfigArgs),
    /// Print the default configuration as YAML
    PrintDefaultConfig,
}

/// Arguments shared by the commands that load a preset directory.
#[derive(Args)]
pub struct LoadArgs {
    /// Directory containing preset and convention files
    pub directory: PathBuf,

    /// Optional hierarchy declaration file (YAML or JSON)
    #[arg(long)]
    pub hierarchy: Option<PathBuf>,

    /// Optional naming configuration file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `tree` command.
#[derive(Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Also list the convention declarations on each preset
    #[arg(long)]
    pub conventions: bool,
}

/// Arguments for the `resolve` command.
#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Preset to resolve under
    pub preset: String,

    /// Convention category, e.g. "cinematics"
    pub convention_type: String,
}

/// Arguments for the `validate-config` command.
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub config: PathBuf,
}

//! Nameforge CLI - Naming Preset & Convention Inspector
//!
//! Loads preset/convention directories the way pipeline tools do at startup
//! and lets maintainers inspect the resolved hierarchy, query convention
//! resolution for a category, and validate configuration files.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Tree(args) => {
            cli::tree_command(args)?;
        }
        Commands::Resolve(args) => {
            cli::resolve_command(args)?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
    }

    Ok(())
}

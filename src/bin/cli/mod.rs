//! CLI module for the nameforge binary.

mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::{print_default_config, resolve_command, tree_command, validate_config};

//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Title search (case-insensitive).
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Page number, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Scenario file (TOML or JSON).
    pub scenario: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

pub mod config;
pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "storetypes",
    about = "List the datastore types a repository manager offers",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Override the data directory (default: ~/.local/share/storetypes)
    #[arg(long, env = "STORETYPES_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Server base URL, overriding the configured one
    #[arg(long, env = "STORETYPES_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// User for basic authentication, overriding the configured one
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication (never stored)
    #[arg(long, env = "STORETYPES_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and print the available datastore types
    Types {
        /// Include disabled types
        #[arg(long)]
        all: bool,

        /// Sort by name in descending order
        #[arg(long)]
        desc: bool,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., base_url, timeout_secs)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

/// Connection overrides taken from global flags.
#[derive(Debug, Default)]
pub struct Connection {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

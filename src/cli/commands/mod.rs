//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod cache;
pub mod config;
pub mod fetch;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::output::OutputConfig;
use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::PkgstackDirs;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Platform directories
    pub dirs: PkgstackDirs,
    /// Config file the configuration was read from
    pub config_path: PathBuf,
    /// Configuration with command-line overrides applied
    pub config: GlobalConfig,
    /// Output mode
    pub output: OutputConfig,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch package lists for one or more projects
    Fetch {
        /// Project identifiers, processed in order
        #[arg(required = true, value_name = "PROJECT")]
        projects: Vec<String>,
    },

    /// Manage the package cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache information
    Info,

    /// Remove every cached entry
    Clear,

    /// Remove expired entries
    Cleanup,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Fetch { projects } => fetch::execute(ctx, projects).await,
            Self::Cache { command } => match command {
                CacheCommands::Info => cache::execute_info(ctx).await,
                CacheCommands::Clear => cache::execute_clear(ctx).await,
                CacheCommands::Cleanup => cache::execute_cleanup(ctx).await,
            },
            Self::Config { command } => match command {
                ConfigCommands::Show => config::execute_show(ctx),
                ConfigCommands::Path => config::execute_path(ctx),
            },
        }
    }
}

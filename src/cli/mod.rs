//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::PkgstackDirs;
use commands::{CommandContext, Commands};
use output::OutputConfig;

/// pkgstack - cached, rate-limited package metadata from Repology
#[derive(Parser, Debug)]
#[command(name = "pkgstack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to config.toml in the config directory)
    #[arg(long, global = true, env = "PKGSTACK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog base URL
    #[arg(long, global = true, env = "PKGSTACK_CATALOG_URL", value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Cache directory
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Catalog requests per second
    #[arg(long, global = true, value_name = "RPS")]
    pub rate: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output configuration selected by the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Config file to read: `--config` or the default location
    pub fn config_path(&self, dirs: &PkgstackDirs) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| dirs.global_config_path())
    }

    /// Load the config file and apply command-line overrides
    pub fn load_config(&self, dirs: &PkgstackDirs) -> Result<GlobalConfig> {
        let path = self.config_path(dirs);
        let mut config = GlobalConfig::load_from_path(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        if let Some(url) = &self.catalog_url {
            config.catalog.url = Some(url.clone());
        }
        if let Some(dir) = &self.cache_dir {
            config.cache.dir = Some(dir.clone());
        }
        if let Some(rate) = self.rate {
            config.catalog.requests_per_second = Some(rate);
        }

        Ok(config)
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let Some(command) = self.command.as_ref() else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let dirs = PkgstackDirs::new();
        let config = self.load_config(&dirs)?;
        let ctx = CommandContext {
            config_path: self.config_path(&dirs),
            dirs,
            config,
            output: self.output_config(),
        };

        command.run(&ctx).await
    }
}

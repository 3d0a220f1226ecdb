//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seoaudit_core::config::CONFIG_ENV_VAR;
use seoaudit_core::AnalyzerConfig;
use std::path::PathBuf;

pub mod density;
pub mod serve;
pub mod signals;

/// SEO Audit - keyword density and on-page signals
#[derive(Parser)]
#[command(name = "seoaudit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML analyzer config
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Rank the keywords of a page
    Density(density::DensityArgs),

    /// Show title, meta description and headings of a page
    Signals(signals::SignalsArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = AnalyzerConfig::load_or_default(self.config.as_deref())
            .context("Failed to load analyzer config")?;

        if self.verbose {
            eprintln!("{config:#?}");
        }

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Density(args) => density::execute(args, config).await,
            Commands::Signals(args) => signals::execute(args, config).await,
        }
    }
}

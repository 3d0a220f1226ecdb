//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use seoaudit_core::AnalyzerConfig;
use seoaudit_web::state::AppState;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030", env = "SEOAUDIT_PORT")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1", env = "SEOAUDIT_HOST")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./seoaudit.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: AnalyzerConfig) -> Result<()> {
    let state = AppState::from_config(config)?;

    println!();
    println!("  {} {}", "SEO Audit".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/api/keyword-density",
        "Density".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  http://{}:{}/api/page-signals",
        "Signals".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    seoaudit_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}

//! Page signals command.

use anyhow::Result;
use clap::Args;
use seoaudit_core::{AnalysisRequest, AnalyzerConfig, Auditor};

use crate::output;

#[derive(Args)]
pub struct SignalsArgs {
    /// Absolute URL of the page to inspect
    pub url: String,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: SignalsArgs, config: AnalyzerConfig) -> Result<()> {
    let auditor = Auditor::new(config)?;
    let signals = auditor
        .page_signals(&AnalysisRequest::new(args.url.as_str()))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&signals)?);
    } else {
        output::print_signals(&signals);
    }

    Ok(())
}

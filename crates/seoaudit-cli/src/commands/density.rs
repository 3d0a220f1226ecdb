//! Keyword density command.

use anyhow::Result;
use clap::Args;
use seoaudit_core::{AnalysisRequest, AnalyzerConfig, Auditor};

use crate::output;

#[derive(Args)]
pub struct DensityArgs {
    /// Absolute URL of the page to analyze
    pub url: String,

    /// Print the raw JSON response instead of a table
    #[arg(long)]
    pub json: bool,

    /// Number of keywords to return
    #[arg(long)]
    pub top: Option<usize>,
}

pub async fn execute(args: DensityArgs, mut config: AnalyzerConfig) -> Result<()> {
    if let Some(top) = args.top {
        config.max_keywords = top;
    }
    let auditor = Auditor::new(config)?;

    let result = auditor
        .keyword_density(&AnalysisRequest::new(args.url.as_str()))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_density(&args.url, &result);
    }

    Ok(())
}

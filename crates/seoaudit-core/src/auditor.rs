//! Request-level entry points: validate, fetch, analyze.

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::density::model::{AnalysisRequest, AnalysisResult};
use crate::density::KeywordDensityAnalyzer;
use crate::error::AuditResult;
use crate::fetch::{validate_url, PageFetcher};
use crate::signals::model::PageSignals;
use crate::signals::SignalExtractor;

/// Fetches pages and runs the analyzers on them.
///
/// Holds only immutable state, so one instance can serve concurrent
/// requests behind an `Arc`.
#[derive(Clone)]
pub struct Auditor {
    config: AnalyzerConfig,
    fetcher: PageFetcher,
    density: KeywordDensityAnalyzer,
    signals: SignalExtractor,
}

impl Auditor {
    pub fn new(config: AnalyzerConfig) -> AuditResult<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: PageFetcher::new(&config)?,
            density: KeywordDensityAnalyzer::new(&config)?,
            signals: SignalExtractor::new()?,
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Keyword density for the page at `request.url`.
    pub async fn keyword_density(&self, request: &AnalysisRequest) -> AuditResult<AnalysisResult> {
        let url = validate_url(request.url.as_deref())?;
        let html = self.fetcher.fetch(&url).await?;
        let result = self.density.analyze_html(&html);
        debug!(url = %url, total_words = result.total_words, "Keyword density computed");
        Ok(result)
    }

    /// Title, meta description and headings for the page at `request.url`.
    pub async fn page_signals(&self, request: &AnalysisRequest) -> AuditResult<PageSignals> {
        let url = validate_url(request.url.as_deref())?;
        let html = self.fetcher.fetch(&url).await?;
        Ok(self.signals.extract(url.as_str(), &html))
    }
}

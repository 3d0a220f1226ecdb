//! Keyword density models.

use serde::{Deserialize, Serialize};

/// Body of a keyword density request.
///
/// `url` is optional at the type level so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensityEntry {
    pub keyword: String,
    pub count: usize,
    /// Percentage of all tokens, rounded to two decimals.
    pub density: f64,
}

/// Ranked keywords for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub keyword_density: Vec<KeywordDensityEntry>,
    pub total_words: usize,
}

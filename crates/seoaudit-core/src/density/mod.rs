//! Keyword density analysis.
//!
//! Visible text is split on whitespace; every token counts toward the
//! total, but only tokens longer than the short-token threshold are ranked.
//! Ranking is by count descending, ties in first-seen order.

pub mod model;

use std::collections::HashMap;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::AuditResult;
use crate::html::HtmlNormalizer;
use model::{AnalysisResult, KeywordDensityEntry};

/// Token counts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TokenFrequency {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token longer than `short_token_max_chars` characters.
    pub fn from_tokens<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
        short_token_max_chars: usize,
    ) -> Self {
        let mut frequency = Self::new();
        for token in tokens {
            if token.chars().count() > short_token_max_chars {
                frequency.record(token);
            }
        }
        frequency
    }

    pub fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.counts.len());
                self.counts.push((token.to_string(), 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.counts[slot].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Top `limit` entries by count; the sort is stable so equal counts
    /// keep first-seen order.
    pub fn ranked(&self, total_words: usize, limit: usize) -> Vec<KeywordDensityEntry> {
        let mut entries: Vec<&(String, usize)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        entries
            .into_iter()
            .take(limit)
            .map(|(keyword, count)| KeywordDensityEntry {
                keyword: keyword.clone(),
                count: *count,
                density: density_percent(*count, total_words),
            })
            .collect()
    }
}

/// `100 * count / total`, rounded to two decimals; zero when `total` is zero.
pub fn density_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = 100.0 * count as f64 / total as f64;
    (raw * 100.0).round() / 100.0
}

/// Ranks keywords of HTML documents.
#[derive(Debug, Clone)]
pub struct KeywordDensityAnalyzer {
    normalizer: HtmlNormalizer,
    short_token_max_chars: usize,
    max_keywords: usize,
}

impl KeywordDensityAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> AuditResult<Self> {
        Ok(Self {
            normalizer: HtmlNormalizer::new()?,
            short_token_max_chars: config.short_token_max_chars,
            max_keywords: config.max_keywords,
        })
    }

    /// Override the number of returned keywords.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn analyze_html(&self, html: &str) -> AnalysisResult {
        let text = self.normalizer.visible_text(html);
        self.analyze_text(&text)
    }

    /// Rank already-normalized text.
    pub fn analyze_text(&self, text: &str) -> AnalysisResult {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let total_words = tokens.len();
        let frequency = TokenFrequency::from_tokens(tokens, self.short_token_max_chars);
        let keyword_density = frequency.ranked(total_words, self.max_keywords);

        debug!(
            total_words,
            distinct = frequency.len(),
            returned = keyword_density.len(),
            "Ranked keywords"
        );

        AnalysisResult {
            keyword_density,
            total_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> KeywordDensityAnalyzer {
        KeywordDensityAnalyzer::new(&AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_script_style_example() {
        let html = "<script>ignored</script><style>ignored</style><p>Hello hello WORLD</p>";
        let result = analyzer().analyze_html(html);

        assert_eq!(result.total_words, 3);
        assert_eq!(result.keyword_density.len(), 2);
        assert_eq!(result.keyword_density[0].keyword, "hello");
        assert_eq!(result.keyword_density[0].count, 2);
        assert_eq!(result.keyword_density[0].density, 66.67);
        assert_eq!(result.keyword_density[1].keyword, "world");
        assert_eq!(result.keyword_density[1].count, 1);
        assert_eq!(result.keyword_density[1].density, 33.33);
    }

    #[test]
    fn test_short_tokens_count_toward_total_only() {
        let result = analyzer().analyze_text("the cat sat on the mat with rust");
        assert_eq!(result.total_words, 8);
        let keywords: Vec<&str> = result.keyword_density.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["with", "rust"]);
        assert_eq!(result.keyword_density[0].density, 12.5);
    }

    #[test]
    fn test_no_long_tokens_gives_empty_ranking() {
        let result = analyzer().analyze_html("<p>a an the of to</p>");
        assert_eq!(result.total_words, 5);
        assert!(result.keyword_density.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let result = analyzer().analyze_html("");
        assert_eq!(result.total_words, 0);
        assert!(result.keyword_density.is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let result = analyzer().analyze_text("zeta alpha zeta alpha mango");
        let keywords: Vec<&str> = result.keyword_density.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["zeta", "alpha", "mango"]);
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let result = analyzer().analyze_text("one1 two2 two2 three three three four four four four");
        let counts: Vec<usize> = result.keyword_density.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![4, 3, 2, 1]);
        for pair in result.keyword_density.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_truncated_to_max_keywords() {
        let text: Vec<String> = (0..25).map(|i| format!("word{i:02}")).collect();
        let result = analyzer().analyze_text(&text.join(" "));
        assert_eq!(result.total_words, 25);
        assert_eq!(result.keyword_density.len(), crate::config::MAX_KEYWORDS);
        assert_eq!(result.keyword_density[0].keyword, "word00");
        assert_eq!(result.keyword_density[19].keyword, "word19");
        let sum: f64 = result.keyword_density.iter().map(|e| e.density).sum();
        assert!(sum < 100.0);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "été" is 3 chars / 5 bytes, "über" is 4 chars / 5 bytes
        let result = analyzer().analyze_text("été über");
        let keywords: Vec<&str> = result.keyword_density.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["über"]);
    }

    #[test]
    fn test_every_keyword_is_longer_than_threshold() {
        let html = "<h1>SEO for Rust web apps</h1><p>An SEO tool and a Rust API: try it now.</p>";
        let result = analyzer().analyze_html(html);
        assert!(result
            .keyword_density
            .iter()
            .all(|e| e.keyword.chars().count() > 3 && e.count >= 1));
        assert!(result
            .keyword_density
            .iter()
            .all(|e| (0.0..=100.0).contains(&e.density)));
    }

    #[test]
    fn test_custom_thresholds() {
        let config = AnalyzerConfig {
            short_token_max_chars: 1,
            max_keywords: 2,
            ..AnalyzerConfig::default()
        };
        let analyzer = KeywordDensityAnalyzer::new(&config).unwrap();
        let result = analyzer.analyze_text("go go to be a");
        let keywords: Vec<&str> = result.keyword_density.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["go", "to"]);
    }

    #[test]
    fn test_with_max_keywords_override() {
        let result = analyzer().with_max_keywords(1).analyze_text("alpha beta beta");
        assert_eq!(result.keyword_density.len(), 1);
        assert_eq!(result.keyword_density[0].keyword, "beta");
    }

    #[test]
    fn test_density_guard_on_zero_total() {
        assert_eq!(density_percent(0, 0), 0.0);
        assert_eq!(density_percent(1, 4), 25.0);
    }

    #[test]
    fn test_token_frequency_record_and_get() {
        let freq = TokenFrequency::from_tokens(["keyword", "tiny", "keyword", "a"], 3);
        assert_eq!(freq.get("keyword"), Some(2));
        assert_eq!(freq.get("tiny"), Some(1));
        assert_eq!(freq.get("a"), None);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = analyzer().analyze_text("hello hello");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalWords"], 2);
        assert_eq!(json["keywordDensity"][0]["keyword"], "hello");
        assert_eq!(json["keywordDensity"][0]["count"], 2);
        assert_eq!(json["keywordDensity"][0]["density"], 100.0);
    }
}

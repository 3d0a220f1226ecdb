//! On-page SEO signals: title, meta description and headings.

pub mod model;

use regex::Regex;

use crate::error::AuditResult;
use crate::html::{compile, HtmlNormalizer};
use model::{Headings, PageSignals};

const TITLE_ELEMENT: &str = r"(?is)<title\b[^>]*>(.*?)</title\s*>";
const META_TAG: &str = r"(?is)<meta\b[^>]*>";
const ATTRIBUTE: &str = r#"(?i)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#;

/// Extracts [`PageSignals`] from raw HTML.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    normalizer: HtmlNormalizer,
    title: Regex,
    meta_tag: Regex,
    attribute: Regex,
    headings: [Regex; 3],
}

impl SignalExtractor {
    pub fn new() -> AuditResult<Self> {
        Ok(Self {
            normalizer: HtmlNormalizer::new()?,
            title: compile(TITLE_ELEMENT)?,
            meta_tag: compile(META_TAG)?,
            attribute: compile(ATTRIBUTE)?,
            headings: [heading(1)?, heading(2)?, heading(3)?],
        })
    }

    pub fn extract(&self, url: &str, html: &str) -> PageSignals {
        let shown = self.normalizer.strip_hidden_blocks(html);

        let title = self.title(&shown);
        let meta_description = self.meta_description(&shown);
        let [h1, h2, h3] = self.headings.clone().map(|pattern| self.heading_texts(&pattern, &shown));
        let total_words = self.normalizer.visible_text(&shown).split_whitespace().count();

        PageSignals {
            url: url.to_string(),
            title_length: char_len(title.as_deref()),
            title,
            meta_description_length: char_len(meta_description.as_deref()),
            meta_description,
            headings: Headings { h1, h2, h3 },
            total_words,
        }
    }

    fn title(&self, html: &str) -> Option<String> {
        let inner = self.title.captures(html)?.get(1)?.as_str();
        non_empty(self.normalizer.inner_text(inner))
    }

    fn meta_description(&self, html: &str) -> Option<String> {
        self.meta_tag.find_iter(html).find_map(|tag| {
            let mut is_description = false;
            let mut content = None;
            for caps in self.attribute.captures_iter(tag.as_str()) {
                let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str())
                    .unwrap_or_default();

                if name.eq_ignore_ascii_case("name") && value.eq_ignore_ascii_case("description") {
                    is_description = true;
                } else if name.eq_ignore_ascii_case("content") {
                    content = Some(value.trim().to_string());
                }
            }
            if is_description {
                content
            } else {
                None
            }
        })
    }

    fn heading_texts(&self, pattern: &Regex, html: &str) -> Vec<String> {
        pattern
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .filter_map(|inner| non_empty(self.normalizer.inner_text(inner.as_str())))
            .collect()
    }
}

fn heading(level: u8) -> AuditResult<Regex> {
    compile(&format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}\s*>"))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn char_len(text: Option<&str>) -> usize {
    text.map(|t| t.chars().count()).unwrap_or(0)
}

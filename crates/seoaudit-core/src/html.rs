//! HTML to visible text.
//!
//! Pattern based, not a parser: `<style>` and `<script>` blocks are dropped
//! with their content, every other tag becomes a single space. Nested or
//! malformed markup is handled only approximately.

use regex::Regex;

use crate::error::{AuditError, AuditResult};

const STYLE_BLOCK: &str = r"(?is)<style\b[^>]*>.*?</style\s*>";
const SCRIPT_BLOCK: &str = r"(?is)<script\b[^>]*>.*?</script\s*>";
const ANY_TAG: &str = r"<[^>]*>";
const WHITESPACE_RUN: &str = r"\s+";

/// Compiled patterns for turning markup into text.
#[derive(Debug, Clone)]
pub struct HtmlNormalizer {
    style_block: Regex,
    script_block: Regex,
    any_tag: Regex,
    whitespace_run: Regex,
}

impl HtmlNormalizer {
    pub fn new() -> AuditResult<Self> {
        Ok(Self {
            style_block: compile(STYLE_BLOCK)?,
            script_block: compile(SCRIPT_BLOCK)?,
            any_tag: compile(ANY_TAG)?,
            whitespace_run: compile(WHITESPACE_RUN)?,
        })
    }

    /// Remove `<style>` and `<script>` blocks, content included.
    pub fn strip_hidden_blocks(&self, html: &str) -> String {
        let without_style = self.style_block.replace_all(html, "");
        self.script_block.replace_all(&without_style, "").into_owned()
    }

    /// Replace tags with spaces, collapse whitespace and trim.
    ///
    /// Case is preserved; hidden blocks are not removed.
    pub fn inner_text(&self, fragment: &str) -> String {
        let untagged = self.any_tag.replace_all(fragment, " ");
        self.whitespace_run
            .replace_all(&untagged, " ")
            .trim()
            .to_string()
    }

    /// Full normalization: hidden blocks removed, tags replaced,
    /// whitespace collapsed, trimmed and lowercased.
    pub fn visible_text(&self, html: &str) -> String {
        let shown = self.strip_hidden_blocks(html);
        self.inner_text(&shown).to_lowercase()
    }
}

pub(crate) fn compile(pattern: &str) -> AuditResult<Regex> {
    Regex::new(pattern).map_err(|e| AuditError::unexpected(format!("invalid pattern {pattern}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> HtmlNormalizer {
        HtmlNormalizer::new().unwrap()
    }

    #[test]
    fn test_hidden_blocks_removed() {
        let html = "<script>ignored</script><style>ignored</style><p>Hello hello WORLD</p>";
        assert_eq!(normalizer().visible_text(html), "hello hello world");
    }

    #[test]
    fn test_blocks_are_case_insensitive_and_multiline() {
        let html = "<STYLE type=\"text/css\">\nbody {\n  color: red;\n}\n</Style>\
                    <Script src=\"x.js\">\nvar a = 1;\n</SCRIPT >Visible";
        assert_eq!(normalizer().visible_text(html), "visible");
    }

    #[test]
    fn test_multiple_blocks_are_removed_lazily() {
        let html = "<script>a()</script>keep<script>b()</script>";
        assert_eq!(normalizer().visible_text(html), "keep");
    }

    #[test]
    fn test_tags_become_word_boundaries() {
        let html = "<div>one</div><div>two</div><br/>three";
        assert_eq!(normalizer().visible_text(html), "one two three");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        let html = "  <p>\n\n  spaced\t\tout   </p>  \r\n";
        assert_eq!(normalizer().visible_text(html), "spaced out");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(normalizer().visible_text(""), "");
        assert_eq!(normalizer().visible_text("<html><body></body></html>"), "");
    }

    #[test]
    fn test_inner_text_keeps_case() {
        assert_eq!(normalizer().inner_text("<b>Rust</b> <i>Guide</i>"), "Rust Guide");
    }

    #[test]
    fn test_style_like_tag_names_not_treated_as_blocks() {
        let html = "<styles>kept</styles>";
        assert_eq!(normalizer().visible_text(html), "kept");
    }
}

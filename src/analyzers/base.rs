//! Base analyzer trait and shared helpers
//!
//! This module defines the core abstraction for in-page checks:
//! - `Analyzer` trait that all field analyzers implement
//! - Documentation URLs cited by checklist items

use crate::config::GuidanceConfig;
use crate::models::{Category, ChecklistItem, ContentItem};

/// Search-engine documentation cited in `officialSource`
pub mod sources {
    pub const TITLE_LINKS: &str =
        "https://developers.google.com/search/docs/appearance/title-link";
    pub const SNIPPETS: &str = "https://developers.google.com/search/docs/appearance/snippet";
    pub const ROBOTS_META: &str =
        "https://developers.google.com/search/docs/crawling-indexing/robots-meta-tag";
    pub const HELPFUL_CONTENT: &str =
        "https://developers.google.com/search/docs/fundamentals/creating-helpful-content";
    pub const IMAGES: &str = "https://developers.google.com/search/docs/appearance/google-images";
    pub const STRUCTURED_DATA: &str =
        "https://developers.google.com/search/docs/appearance/structured-data/intro-structured-data";
    pub const ARTICLE_SCHEMA: &str =
        "https://developers.google.com/search/docs/appearance/structured-data/article";
    pub const FAQ_SCHEMA: &str =
        "https://developers.google.com/search/docs/appearance/structured-data/faqpage";
    pub const CANONICAL: &str =
        "https://developers.google.com/search/docs/crawling-indexing/consolidate-duplicate-urls";
    pub const HTTPS: &str =
        "https://developers.google.com/search/blog/2014/08/https-as-ranking-signal";
    pub const SITEMAPS: &str =
        "https://developers.google.com/search/docs/crawling-indexing/sitemaps/build-sitemap";
    pub const MOBILE_FIRST: &str = "https://developers.google.com/search/docs/crawling-indexing/mobile/mobile-sites-mobile-first-indexing";
    pub const WEB_VITALS: &str = "https://web.dev/articles/vitals";
}

/// Trait for all in-page field analyzers
///
/// Analyzers are stateless: they read the content item and the
/// configured thresholds and return checklist items for their own
/// category. They never fail; missing fields are findings, not errors.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyAnalyzer;
///
/// impl Analyzer for MyAnalyzer {
///     fn name(&self) -> &'static str {
///         "my-analyzer"
///     }
///
///     fn category(&self) -> Category {
///         Category::Technical
///     }
///
///     fn analyze(&self, item: &ContentItem, config: &GuidanceConfig) -> Vec<ChecklistItem> {
///         vec![]
///     }
/// }
/// ```
pub trait Analyzer: Send + Sync {
    /// Unique identifier for this analyzer (kebab-case)
    fn name(&self) -> &'static str;

    /// Category every emitted item belongs to
    fn category(&self) -> Category;

    /// Run the checks and return findings in display order
    fn analyze(&self, item: &ContentItem, config: &GuidanceConfig) -> Vec<ChecklistItem>;
}

/// Length in characters, not bytes
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("مرحبا"), 5);
        assert_eq!(char_len(""), 0);
    }
}

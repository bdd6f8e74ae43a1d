//! Content Quality Analyzer
//!
//! Scores body length into exactly one of five word-count buckets and
//! notes whether a content depth was chosen.

use crate::analyzers::base::{sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};
use crate::text::count_words;

pub struct ContentQualityAnalyzer;

impl Analyzer for ContentQualityAnalyzer {
    fn name(&self) -> &'static str {
        "content-quality"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn analyze(&self, item: &ContentItem, config: &GuidanceConfig) -> Vec<ChecklistItem> {
        vec![check_word_count(item, config), check_depth(item)]
    }
}

/// Explicit `wordCount`, or counted from the body in the item's language
pub fn effective_word_count(item: &ContentItem, config: &GuidanceConfig) -> u64 {
    if let Some(count) = item.word_count {
        return count;
    }
    let language = item
        .in_language
        .as_deref()
        .unwrap_or(config.default_language.as_str());
    count_words(item.content.as_deref().unwrap_or(""), language) as u64
}

fn check_word_count(item: &ContentItem, config: &GuidanceConfig) -> ChecklistItem {
    let words = effective_word_count(item, config);
    let t = &config.thresholds;
    let target = format!("{}-{} words", t.word_count_good, t.word_count_max);

    let check = if words == 0 {
        ChecklistItem::new(
            "content-empty",
            Category::Content,
            "Article has no content",
            CheckStatus::Fail,
            Priority::Critical,
            format!("Write the article body; aim for {target}."),
        )
    } else if words < t.word_count_min {
        ChecklistItem::new(
            "content-too-short",
            Category::Content,
            "Content is too thin",
            CheckStatus::Fail,
            Priority::Critical,
            format!(
                "At {words} words the article is unlikely to rank. Expand it past {} words.",
                t.word_count_min
            ),
        )
    } else if words < t.word_count_good {
        ChecklistItem::new(
            "content-short",
            Category::Content,
            "Content could be more comprehensive",
            CheckStatus::Warning,
            Priority::High,
            format!(
                "Add about {} more words covering related questions and examples.",
                t.word_count_good - words
            ),
        )
    } else if words <= t.word_count_max {
        ChecklistItem::new(
            "content-optimal",
            Category::Content,
            "Content length is optimal",
            CheckStatus::Pass,
            Priority::High,
            "Keep sections scannable with clear subheadings.",
        )
    } else {
        ChecklistItem::new(
            "content-long",
            Category::Content,
            "Long-form content",
            CheckStatus::Info,
            Priority::Low,
            "Consider a table of contents or splitting the piece into a series.",
        )
    };

    let field = if item.word_count.is_some() {
        "wordCount"
    } else {
        "content"
    };

    check
        .with_field(field)
        .with_values(format!("{words} words"), target)
        .with_source(sources::HELPFUL_CONTENT)
}

fn check_depth(item: &ContentItem) -> ChecklistItem {
    let check = match item.depth() {
        Some(depth) => ChecklistItem::new(
            "content-depth",
            Category::Content,
            "Content depth is set",
            CheckStatus::Pass,
            Priority::Low,
            "Make sure the body delivers the depth promised.",
        )
        .with_values(depth, "set"),
        None => ChecklistItem::new(
            "content-depth",
            Category::Content,
            "Content depth is not set",
            CheckStatus::Info,
            Priority::Low,
            "Pick a content depth so editors know how thorough the piece should be.",
        ),
    };
    check.with_field("contentDepth")
}

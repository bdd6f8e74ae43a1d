//! Meta Tags Analyzer
//!
//! Title and description length against search snippet limits, plus the
//! robots directive.

use crate::analyzers::base::{char_len, sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};

pub struct MetaTagsAnalyzer;

impl Analyzer for MetaTagsAnalyzer {
    fn name(&self) -> &'static str {
        "meta-tags"
    }

    fn category(&self) -> Category {
        Category::MetaTags
    }

    fn analyze(&self, item: &ContentItem, config: &GuidanceConfig) -> Vec<ChecklistItem> {
        vec![
            check_title(item, config),
            check_description(item, config),
            check_robots(item),
        ]
    }
}

fn check_title(item: &ContentItem, config: &GuidanceConfig) -> ChecklistItem {
    let len = char_len(item.effective_title());
    let (min, max) = (config.thresholds.title_min, config.thresholds.title_max);

    let (status, priority, label, recommendation) = if len == 0 {
        (
            CheckStatus::Fail,
            Priority::Critical,
            "SEO title is missing",
            format!("Write an SEO title of {min}-{max} characters that includes the main keyword."),
        )
    } else if len < min {
        (
            CheckStatus::Warning,
            Priority::High,
            "SEO title is too short",
            format!("Lengthen the title to at least {min} characters; it is {len} now."),
        )
    } else if len <= max {
        (
            CheckStatus::Pass,
            Priority::High,
            "SEO title length is optimal",
            "Keep the main keyword near the start of the title.".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            Priority::Medium,
            "SEO title is too long",
            format!("Shorten the title to {max} characters or fewer so it isn't truncated in results."),
        )
    };

    ChecklistItem::new("meta-title", Category::MetaTags, label, status, priority, recommendation)
        .with_field("seoTitle")
        .with_values(format!("{len} characters"), format!("{min}-{max} characters"))
        .with_source(sources::TITLE_LINKS)
}

fn check_description(item: &ContentItem, config: &GuidanceConfig) -> ChecklistItem {
    let len = char_len(item.effective_description());
    let (min, max) = (
        config.thresholds.description_min,
        config.thresholds.description_max,
    );

    let (status, priority, label, recommendation) = if len == 0 {
        (
            CheckStatus::Fail,
            Priority::Critical,
            "Meta description is missing",
            format!("Write a meta description of {min}-{max} characters summarizing the article."),
        )
    } else if len < min {
        (
            CheckStatus::Warning,
            Priority::High,
            "Meta description is too short",
            format!("Expand the description to at least {min} characters; it is {len} now."),
        )
    } else if len <= max {
        (
            CheckStatus::Pass,
            Priority::High,
            "Meta description length is optimal",
            "Make sure the description ends with a reason to click.".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            Priority::Medium,
            "Meta description is too long",
            format!("Trim the description to {max} characters or fewer to avoid truncation."),
        )
    };

    ChecklistItem::new(
        "meta-description",
        Category::MetaTags,
        label,
        status,
        priority,
        recommendation,
    )
    .with_field("seoDescription")
    .with_values(format!("{len} characters"), format!("{min}-{max} characters"))
    .with_source(sources::SNIPPETS)
}

fn check_robots(item: &ContentItem) -> ChecklistItem {
    let robots = item.effective_meta_robots();

    let check = if robots.contains("noindex") {
        ChecklistItem::new(
            "meta-robots",
            Category::MetaTags,
            "Page is excluded from indexing",
            CheckStatus::Warning,
            Priority::High,
            "Remove \"noindex\" from the robots directive unless the page should stay out of search.",
        )
    } else {
        ChecklistItem::new(
            "meta-robots",
            Category::MetaTags,
            "Page is indexable",
            CheckStatus::Pass,
            Priority::Medium,
            "No action needed.",
        )
    };

    check
        .with_field("metaRobots")
        .with_values(robots, "index, follow")
        .with_source(sources::ROBOTS_META)
}

//! Technical SEO Analyzer

use crate::analyzers::base::{sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};

pub struct TechnicalAnalyzer;

impl Analyzer for TechnicalAnalyzer {
    fn name(&self) -> &'static str {
        "technical"
    }

    fn category(&self) -> Category {
        Category::Technical
    }

    fn analyze(&self, item: &ContentItem, _config: &GuidanceConfig) -> Vec<ChecklistItem> {
        let mut items = vec![check_canonical(item)];

        if let Some(priority) = item.sitemap_priority {
            items.push(
                ChecklistItem::new(
                    "sitemap-priority",
                    Category::Technical,
                    "Sitemap priority is set",
                    CheckStatus::Pass,
                    Priority::Low,
                    "No action needed.",
                )
                .with_field("sitemapPriority")
                .with_values(priority.to_string(), "0.0-1.0")
                .with_source(sources::SITEMAPS),
            );
        }

        if let Some(freq) = &item.sitemap_change_freq {
            items.push(
                ChecklistItem::new(
                    "sitemap-change-freq",
                    Category::Technical,
                    "Sitemap change frequency is set",
                    CheckStatus::Pass,
                    Priority::Low,
                    "No action needed.",
                )
                .with_field("sitemapChangeFreq")
                .with_values(freq.as_str(), "daily, weekly, monthly")
                .with_source(sources::SITEMAPS),
            );
        }

        items
    }
}

fn check_canonical(item: &ContentItem) -> ChecklistItem {
    match item.canonical() {
        None => ChecklistItem::new(
            "canonical-url",
            Category::Technical,
            "Canonical URL is missing",
            CheckStatus::Warning,
            Priority::High,
            "Set a canonical URL so duplicate listings consolidate to this article.",
        )
        .with_field("canonicalUrl")
        .with_source(sources::CANONICAL),
        Some(url) if !url.starts_with("https://") => ChecklistItem::new(
            "canonical-url",
            Category::Technical,
            "Canonical URL must use HTTPS",
            CheckStatus::Warning,
            Priority::High,
            "Point the canonical URL at the https:// version of the page.",
        )
        .with_field("canonicalUrl")
        .with_values(url, "https://...")
        .with_source(sources::HTTPS),
        Some(url) => ChecklistItem::new(
            "canonical-url",
            Category::Technical,
            "Canonical URL is set over HTTPS",
            CheckStatus::Pass,
            Priority::High,
            "No action needed.",
        )
        .with_field("canonicalUrl")
        .with_values(url, "https://...")
        .with_source(sources::CANONICAL),
    }
}

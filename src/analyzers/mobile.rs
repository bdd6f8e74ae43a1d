//! Mobile Analyzer
//!
//! Mobile friendliness and Core Web Vitals are measured on the rendered
//! page, which the form data can't tell us about. Both items are fixed
//! reminders and always report `info`, so this category never scores.

use crate::analyzers::base::{sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};

pub struct MobileAnalyzer;

impl Analyzer for MobileAnalyzer {
    fn name(&self) -> &'static str {
        "mobile"
    }

    fn category(&self) -> Category {
        Category::Mobile
    }

    fn analyze(&self, _item: &ContentItem, _config: &GuidanceConfig) -> Vec<ChecklistItem> {
        vec![
            ChecklistItem::new(
                "mobile-friendly",
                Category::Mobile,
                "Verify mobile friendliness",
                CheckStatus::Info,
                Priority::High,
                "Preview the article on a phone: no horizontal scrolling, readable text, tappable links.",
            )
            .with_source(sources::MOBILE_FIRST),
            ChecklistItem::new(
                "core-web-vitals",
                Category::Mobile,
                "Check Core Web Vitals",
                CheckStatus::Info,
                Priority::Medium,
                "Keep LCP under 2.5s, INP under 200ms and CLS under 0.1; compress large embeds.",
            )
            .with_source(sources::WEB_VITALS),
        ]
    }
}

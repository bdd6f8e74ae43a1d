//! In-page field analyzers
//!
//! Each analyzer inspects one aspect of a content item and returns
//! checklist items for a single category. Analyzers share no state and
//! can be called on their own.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Evaluator                            │
//! │  - Runs every analyzer in display order                     │
//! │  - Scores each category with its weight                     │
//! │  - Partitions findings into issue buckets                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Analyzer Trait                         │
//! │  - name(): Unique identifier                                │
//! │  - category(): Category all findings belong to              │
//! │  - analyze(item, config): Return checklist items            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Analyzers
//!
//! - `MetaTagsAnalyzer` - Title/description length, robots directive
//! - `ContentQualityAnalyzer` - Word count buckets, content depth
//! - `ImagesAnalyzer` - Featured image
//! - `StructuredDataAnalyzer` - JSON-LD, Article schema, FAQ count
//! - `TechnicalAnalyzer` - Canonical URL, sitemap hints
//! - `MobileAnalyzer` - Fixed mobile/Core Web Vitals reminders
//!
//! # Usage
//!
//! ```ignore
//! use seo_guidance::analyzers::{Analyzer, MetaTagsAnalyzer};
//! use seo_guidance::config::GuidanceConfig;
//!
//! let items = MetaTagsAnalyzer.analyze(&item, &GuidanceConfig::default());
//! ```

mod base;
mod content_quality;
mod images;
mod meta_tags;
mod mobile;
mod structured_data;
mod technical;

pub use base::{sources, Analyzer};
pub use content_quality::{effective_word_count, ContentQualityAnalyzer};
pub use images::ImagesAnalyzer;
pub use meta_tags::MetaTagsAnalyzer;
pub use mobile::MobileAnalyzer;
pub use structured_data::StructuredDataAnalyzer;
pub use technical::TechnicalAnalyzer;

/// All analyzers, in the order their findings are displayed
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(MetaTagsAnalyzer),
        Box::new(ContentQualityAnalyzer),
        Box::new(ImagesAnalyzer),
        Box::new(StructuredDataAnalyzer),
        Box::new(TechnicalAnalyzer),
        Box::new(MobileAnalyzer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_default_analyzers_follow_category_order() {
        let categories: Vec<Category> = default_analyzers().iter().map(|a| a.category()).collect();
        assert_eq!(categories, Category::ALL);
    }

    #[test]
    fn test_analyzer_names_are_unique() {
        let analyzers = default_analyzers();
        let mut names: Vec<&str> = analyzers.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), analyzers.len());
    }
}

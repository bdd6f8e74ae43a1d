//! Images Analyzer

use crate::analyzers::base::{sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};

pub struct ImagesAnalyzer;

impl Analyzer for ImagesAnalyzer {
    fn name(&self) -> &'static str {
        "images"
    }

    fn category(&self) -> Category {
        Category::Images
    }

    fn analyze(&self, item: &ContentItem, _config: &GuidanceConfig) -> Vec<ChecklistItem> {
        let check = if item.featured_image().is_some() {
            ChecklistItem::new(
                "featured-image",
                Category::Images,
                "Featured image is set",
                CheckStatus::Pass,
                Priority::High,
                "Make sure the image has descriptive alt text.",
            )
        } else {
            ChecklistItem::new(
                "featured-image",
                Category::Images,
                "Featured image is missing",
                CheckStatus::Fail,
                Priority::Critical,
                "Attach a featured image of at least 1200px width for rich results and social cards.",
            )
        };

        vec![check.with_field("featuredImageId").with_source(sources::IMAGES)]
    }
}

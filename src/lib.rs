//! SEO guidance scoring engine
//!
//! Evaluates one editorial content item (a blog post or article) and
//! returns a weighted 0–100 SEO score, a per-category breakdown, an
//! itemized in-page checklist, prioritized issue buckets and off-page
//! recommendations.
//!
//! ```ignore
//! use seo_guidance::{evaluate, ContentItem};
//!
//! let item: ContentItem = serde_json::from_str(r#"{"seoTitle": "..."}"#)?;
//! let result = evaluate(&item, None);
//! println!("{} ({})", result.overall_score, result.grade());
//! ```

pub mod advisor;
pub mod analyzers;
pub mod config;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
pub mod text;

pub use config::GuidanceConfig;
pub use models::{
    Category, CategoryScore, CheckStatus, ChecklistItem, ContentItem, EvaluateOptions, Issue,
    OffPageRecommendation, Priority, SeoGuidanceResult,
};
pub use pipeline::{evaluate, Evaluator};

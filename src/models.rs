//! Core data models for SEO guidance
//!
//! These models are used throughout the codebase for representing
//! the content item under evaluation, checklist findings, and the
//! final guidance result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default robots directive when the item does not set one
pub const DEFAULT_META_ROBOTS: &str = "index, follow";

/// A question/answer pair attached to a content item
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// A link to another article on the same site
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// An external source cited by a content item
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The content piece being evaluated.
///
/// Mirrors the editor's form data. Every field is optional; missing
/// values are normalized by the analyzers rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub word_count: Option<u64>,
    #[serde(default)]
    pub in_language: Option<String>,
    #[serde(default)]
    pub content_depth: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub meta_robots: Option<String>,
    #[serde(default)]
    pub featured_image_id: Option<String>,
    #[serde(default)]
    pub json_ld_structured_data: Option<serde_json::Value>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub main_entity_of_page: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default)]
    pub sitemap_priority: Option<f64>,
    #[serde(default)]
    pub sitemap_change_freq: Option<String>,
    #[serde(default)]
    pub related_articles: Option<Vec<RelatedArticle>>,
    #[serde(default)]
    pub og_article_author: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
}

/// Present when set and not blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl ContentItem {
    /// `seoTitle`, falling back to `title`, falling back to empty
    pub fn effective_title(&self) -> &str {
        self.seo_title
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    /// `seoDescription`, falling back to `excerpt`, falling back to empty
    pub fn effective_description(&self) -> &str {
        self.seo_description
            .as_deref()
            .or(self.excerpt.as_deref())
            .unwrap_or("")
    }

    pub fn effective_meta_robots(&self) -> &str {
        self.meta_robots.as_deref().unwrap_or(DEFAULT_META_ROBOTS)
    }

    pub fn featured_image(&self) -> Option<&str> {
        present(&self.featured_image_id)
    }

    pub fn author(&self) -> Option<&str> {
        present(&self.author_id)
    }

    pub fn published(&self) -> Option<&str> {
        present(&self.date_published)
    }

    pub fn canonical(&self) -> Option<&str> {
        present(&self.canonical_url)
    }

    pub fn main_entity(&self) -> Option<&str> {
        present(&self.main_entity_of_page)
    }

    pub fn depth(&self) -> Option<&str> {
        present(&self.content_depth)
    }

    pub fn og_author(&self) -> Option<&str> {
        present(&self.og_article_author)
    }

    /// JSON-LD is present unless missing or explicitly `null`
    pub fn has_json_ld(&self) -> bool {
        matches!(&self.json_ld_structured_data, Some(v) if !v.is_null())
    }

    pub fn has_headline(&self) -> bool {
        present(&self.title).is_some() || present(&self.seo_title).is_some()
    }

    pub fn faq_count(&self) -> usize {
        self.faqs.as_ref().map_or(0, Vec::len)
    }

    pub fn related_count(&self) -> usize {
        self.related_articles.as_ref().map_or(0, Vec::len)
    }

    pub fn citation_count(&self) -> usize {
        self.citations.as_ref().map_or(0, Vec::len)
    }
}

/// Scoring categories, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    MetaTags,
    Content,
    Images,
    StructuredData,
    Technical,
    Mobile,
}

impl Category {
    /// All categories in the order their checklist items are displayed
    pub const ALL: [Category; 6] = [
        Category::MetaTags,
        Category::Content,
        Category::Images,
        Category::StructuredData,
        Category::Technical,
        Category::Mobile,
    ];

    /// Key used in serialized output and config files
    pub fn key(&self) -> &'static str {
        match self {
            Category::MetaTags => "metaTags",
            Category::Content => "content",
            Category::Images => "images",
            Category::StructuredData => "structuredData",
            Category::Technical => "technical",
            Category::Mobile => "mobile",
        }
    }

    /// Human-readable name for reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::MetaTags => "Meta Tags",
            Category::Content => "Content Quality",
            Category::Images => "Images",
            Category::StructuredData => "Structured Data",
            Category::Technical => "Technical SEO",
            Category::Mobile => "Mobile",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
    Info,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "pass"),
            CheckStatus::Warning => write!(f, "warning"),
            CheckStatus::Fail => write!(f, "fail"),
            CheckStatus::Info => write!(f, "info"),
        }
    }
}

/// Priority levels for checklist items
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

/// One finding produced by an analyzer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub category: Category,
    pub label: String,
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
    pub recommendation: String,
    /// Input attribute that produced this finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_source: Option<String>,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        label: impl Into<String>,
        status: CheckStatus,
        priority: Priority,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            status,
            current_value: None,
            target_value: None,
            recommendation: recommendation.into(),
            field: None,
            priority,
            official_source: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_values(mut self, current: impl Into<String>, target: impl Into<String>) -> Self {
        self.current_value = Some(current.into());
        self.target_value = Some(target.into());
        self
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.official_source = Some(url.into());
        self
    }
}

/// Score for one category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: f64,
    pub max_score: f64,
    /// Share of passed checks, 0-100
    pub percentage: u8,
    pub passed: usize,
    pub total: usize,
}

/// Severity bucket of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Warning,
    Suggestion,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Critical => write!(f, "critical"),
            IssueSeverity::Warning => write!(f, "warning"),
            IssueSeverity::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// A checklist item reshaped for the issue lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub code: String,
    pub category: Category,
    pub message: String,
    pub fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub severity: IssueSeverity,
}

impl Issue {
    pub fn from_item(item: &ChecklistItem, severity: IssueSeverity) -> Self {
        Self {
            code: item.id.clone(),
            category: item.category,
            message: item.label.clone(),
            fix: item.recommendation.clone(),
            field: item.field.clone(),
            severity,
        }
    }
}

/// Off-page recommendation groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffPageCategory {
    LinkBuilding,
    SocialSignals,
    ContentDistribution,
    AuthorityBuilding,
}

impl std::fmt::Display for OffPageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffPageCategory::LinkBuilding => write!(f, "link-building"),
            OffPageCategory::SocialSignals => write!(f, "social-signals"),
            OffPageCategory::ContentDistribution => write!(f, "content-distribution"),
            OffPageCategory::AuthorityBuilding => write!(f, "authority-building"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OffPagePriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for OffPagePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffPagePriority::Low => write!(f, "low"),
            OffPagePriority::Medium => write!(f, "medium"),
            OffPagePriority::High => write!(f, "high"),
        }
    }
}

/// Advisory recommendation; never scored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OffPageRecommendation {
    pub id: String,
    pub category: OffPageCategory,
    pub title: String,
    pub description: String,
    pub actionable: bool,
    pub steps: Vec<String>,
    pub priority: OffPagePriority,
}

/// Options accepted by the evaluator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateOptions {
    /// Accepted but not acted upon yet
    #[serde(default)]
    pub validate_structured_data: bool,
}

/// Complete guidance for one content item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoGuidanceResult {
    pub overall_score: u8,
    pub categories: BTreeMap<Category, CategoryScore>,
    pub in_page_checklist: Vec<ChecklistItem>,
    pub off_page_guidance: Vec<OffPageRecommendation>,
    pub critical_issues: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub suggestions: Vec<Issue>,
    pub last_updated: DateTime<Utc>,
}

impl SeoGuidanceResult {
    pub fn grade(&self) -> &'static str {
        grade_from_score(self.overall_score as f64)
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary::from_items(&self.in_page_checklist)
    }
}

/// Calculate grade from score
pub fn grade_from_score(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "A",
        s if s >= 80.0 => "B",
        s if s >= 70.0 => "C",
        s if s >= 60.0 => "D",
        _ => "F",
    }
}

/// Summary of checklist items by status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistSummary {
    pub pass: usize,
    pub warning: usize,
    pub fail: usize,
    pub info: usize,
    pub total: usize,
}

impl ChecklistSummary {
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        let mut summary = Self::default();
        for item in items {
            match item.status {
                CheckStatus::Pass => summary.pass += 1,
                CheckStatus::Warning => summary.warning += 1,
                CheckStatus::Fail => summary.fail += 1,
                CheckStatus::Info => summary.info += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

//! Structured Data Analyzer
//!
//! Checks for a JSON-LD block, the Article schema properties that can be
//! derived from the form, and FAQ richness.
//!
//! Schema completeness checks only report what is there: a missing
//! headline, author or main entity produces no item. Date published is
//! the exception and always reports.

use crate::analyzers::base::{sources, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{Category, CheckStatus, ChecklistItem, ContentItem, Priority};

pub struct StructuredDataAnalyzer;

impl Analyzer for StructuredDataAnalyzer {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn category(&self) -> Category {
        Category::StructuredData
    }

    fn analyze(&self, item: &ContentItem, config: &GuidanceConfig) -> Vec<ChecklistItem> {
        let mut items = vec![check_json_ld(item)];

        if item.has_headline() {
            items.push(schema_pass(
                "schema-headline",
                "Schema headline is available",
                "title",
            ));
        }
        if item.author().is_some() {
            items.push(schema_pass(
                "schema-author",
                "Schema author is set",
                "authorId",
            ));
        }
        items.push(check_date_published(item));
        if item.main_entity().is_some() || item.canonical().is_some() {
            items.push(schema_pass(
                "schema-main-entity",
                "Schema mainEntityOfPage is available",
                "mainEntityOfPage",
            ));
        }

        items.push(check_faqs(item, config));
        items
    }
}

fn check_json_ld(item: &ContentItem) -> ChecklistItem {
    let check = if item.has_json_ld() {
        ChecklistItem::new(
            "json-ld",
            Category::StructuredData,
            "JSON-LD structured data is present",
            CheckStatus::Pass,
            Priority::High,
            "Validate the markup with the Rich Results Test after each edit.",
        )
    } else {
        ChecklistItem::new(
            "json-ld",
            Category::StructuredData,
            "JSON-LD structured data is missing",
            CheckStatus::Warning,
            Priority::High,
            "Add Article or NewsArticle JSON-LD so search engines understand the page.",
        )
    };
    check
        .with_field("jsonLdStructuredData")
        .with_source(sources::STRUCTURED_DATA)
}

fn schema_pass(id: &str, label: &str, field: &str) -> ChecklistItem {
    ChecklistItem::new(
        id,
        Category::StructuredData,
        label,
        CheckStatus::Pass,
        Priority::Medium,
        "No action needed.",
    )
    .with_field(field)
    .with_source(sources::ARTICLE_SCHEMA)
}

fn check_date_published(item: &ContentItem) -> ChecklistItem {
    let check = match item.published() {
        Some(date) => ChecklistItem::new(
            "schema-date-published",
            Category::StructuredData,
            "Schema datePublished is set",
            CheckStatus::Pass,
            Priority::High,
            "Update dateModified whenever the article changes.",
        )
        .with_values(date, "ISO 8601 date"),
        None => ChecklistItem::new(
            "schema-date-published",
            Category::StructuredData,
            "Schema datePublished is not set",
            CheckStatus::Info,
            Priority::Medium,
            "The publish date is filled in on publication; set it explicitly for backdated pieces.",
        ),
    };
    check
        .with_field("datePublished")
        .with_source(sources::ARTICLE_SCHEMA)
}

fn check_faqs(item: &ContentItem, config: &GuidanceConfig) -> ChecklistItem {
    let count = item.faq_count();
    let min = config.thresholds.faq_min;

    let check = if count == 0 {
        ChecklistItem::new(
            "faq-count",
            Category::StructuredData,
            "No FAQs",
            CheckStatus::Info,
            Priority::Medium,
            format!("Add {min} or more FAQs to qualify for FAQ rich results."),
        )
    } else if count < min {
        ChecklistItem::new(
            "faq-count",
            Category::StructuredData,
            "Too few FAQs",
            CheckStatus::Warning,
            Priority::Medium,
            format!(
                "You have {count} FAQs. Add {} more to reach {min}.",
                min - count
            ),
        )
    } else {
        ChecklistItem::new(
            "faq-count",
            Category::StructuredData,
            "FAQ section is rich",
            CheckStatus::Pass,
            Priority::Medium,
            format!("{count} FAQs are ready for FAQPage markup."),
        )
    };

    check
        .with_field("faqs")
        .with_values(count.to_string(), format!("{min}+"))
        .with_source(sources::FAQ_SCHEMA)
}

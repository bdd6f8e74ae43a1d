//! Guidance evaluation pipeline
//!
//! Orchestrates a full evaluation of one content item:
//! 1. Run every field analyzer in display order
//! 2. Build off-page recommendations
//! 3. Score each category with its weight
//! 4. Sum category scores into the overall score
//! 5. Partition findings into critical issues, warnings and suggestions
//! 6. Stamp the result
//!
//! Evaluation is pure apart from reading the clock, so items can be
//! evaluated concurrently without coordination.

use crate::advisor::off_page_guidance;
use crate::analyzers::{default_analyzers, Analyzer};
use crate::config::GuidanceConfig;
use crate::models::{
    CheckStatus, ChecklistItem, ContentItem, EvaluateOptions, Issue, IssueSeverity, Priority,
    SeoGuidanceResult,
};
use crate::scoring::{overall_score, score_category};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Runs the analyzers and scorer with a fixed configuration
pub struct Evaluator {
    config: GuidanceConfig,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(GuidanceConfig::default())
    }
}

impl Evaluator {
    /// Create an evaluator. Weights that don't sum to 100 are rescaled.
    pub fn new(mut config: GuidanceConfig) -> Self {
        if !config.weights.is_valid() {
            warn!(
                "Category weights sum to {:.2}, not 100; normalizing",
                config.weights.total()
            );
            config.weights.normalize();
        }
        Self {
            config,
            analyzers: default_analyzers(),
        }
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    /// Evaluate one item, stamping the current time
    pub fn evaluate(&self, item: &ContentItem, options: &EvaluateOptions) -> SeoGuidanceResult {
        self.evaluate_at(item, options, Utc::now())
    }

    /// Evaluate one item with an explicit timestamp
    pub fn evaluate_at(
        &self,
        item: &ContentItem,
        options: &EvaluateOptions,
        now: DateTime<Utc>,
    ) -> SeoGuidanceResult {
        if options.validate_structured_data {
            // Reserved: the option is accepted but no validation runs yet
            debug!(
                has_json_ld = item.has_json_ld(),
                "Structured data validation requested; skipping"
            );
        }

        let mut checklist = Vec::new();
        let mut categories = BTreeMap::new();
        for analyzer in &self.analyzers {
            let items = analyzer.analyze(item, &self.config);
            let category = analyzer.category();
            let score = score_category(&items, self.config.weights.get(category));
            debug!(
                "{}: {} items, score {:.0}/{:.0}",
                analyzer.name(),
                items.len(),
                score.score,
                score.max_score
            );
            categories.insert(category, score);
            checklist.extend(items);
        }

        let off_page = off_page_guidance(item);
        let overall = overall_score(&categories);
        let (critical_issues, warnings, suggestions) = partition_issues(&checklist);

        info!(
            "SEO score: {} - {} critical, {} warnings, {} suggestions",
            overall,
            critical_issues.len(),
            warnings.len(),
            suggestions.len()
        );

        SeoGuidanceResult {
            overall_score: overall,
            categories,
            in_page_checklist: checklist,
            off_page_guidance: off_page,
            critical_issues,
            warnings,
            suggestions,
            last_updated: now,
        }
    }

    /// Evaluate many items in parallel, keeping input order
    pub fn evaluate_batch(
        &self,
        items: &[ContentItem],
        options: &EvaluateOptions,
    ) -> Vec<SeoGuidanceResult> {
        debug!("Evaluating {} items", items.len());
        items
            .par_iter()
            .map(|item| self.evaluate(item, options))
            .collect()
    }
}

/// Split the checklist into critical issues, warnings and suggestions.
///
/// Critical issues are `fail` items with `critical` priority. A `fail`
/// with any lower priority lands in no bucket.
pub fn partition_issues(items: &[ChecklistItem]) -> (Vec<Issue>, Vec<Issue>, Vec<Issue>) {
    let mut critical = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for item in items {
        match (item.status, item.priority) {
            (CheckStatus::Fail, Priority::Critical) => {
                critical.push(Issue::from_item(item, IssueSeverity::Critical))
            }
            (CheckStatus::Warning, _) => {
                warnings.push(Issue::from_item(item, IssueSeverity::Warning))
            }
            (CheckStatus::Info, _) => {
                suggestions.push(Issue::from_item(item, IssueSeverity::Suggestion))
            }
            _ => {}
        }
    }

    (critical, warnings, suggestions)
}

/// Evaluate one item with the default configuration
pub fn evaluate(item: &ContentItem, options: Option<EvaluateOptions>) -> SeoGuidanceResult {
    Evaluator::default().evaluate(item, &options.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn item(id: &str, status: CheckStatus, priority: Priority) -> ChecklistItem {
        ChecklistItem::new(id, Category::Technical, id, status, priority, "fix")
    }

    #[test]
    fn test_partition_buckets() {
        let items = vec![
            item("a", CheckStatus::Fail, Priority::Critical),
            item("b", CheckStatus::Warning, Priority::High),
            item("c", CheckStatus::Info, Priority::Low),
            item("d", CheckStatus::Pass, Priority::High),
        ];
        let (critical, warnings, suggestions) = partition_issues(&items);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].code, "a");
        assert_eq!(critical[0].severity, IssueSeverity::Critical);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, IssueSeverity::Warning);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].severity, IssueSeverity::Suggestion);
    }

    #[test]
    fn test_non_critical_fail_is_dropped() {
        let items = vec![item("a", CheckStatus::Fail, Priority::Medium)];
        let (critical, warnings, suggestions) = partition_issues(&items);
        assert!(critical.is_empty() && warnings.is_empty() && suggestions.is_empty());
    }

    #[test]
    fn test_issue_carries_item_fields() {
        let source = item("x", CheckStatus::Warning, Priority::High).with_field("canonicalUrl");
        let (_, warnings, _) = partition_issues(std::slice::from_ref(&source));
        let issue = &warnings[0];
        assert_eq!(issue.message, source.label);
        assert_eq!(issue.fix, source.recommendation);
        assert_eq!(issue.field.as_deref(), Some("canonicalUrl"));
        assert_eq!(issue.category, Category::Technical);
    }

    #[test]
    fn test_invalid_weights_are_normalized() {
        let mut config = GuidanceConfig::default();
        config.weights.meta_tags = 120.0;
        let evaluator = Evaluator::new(config);
        assert!(evaluator.config().weights.is_valid());
    }

    #[test]
    fn test_every_category_is_scored() {
        let result = evaluate(&ContentItem::default(), None);
        let keys: Vec<Category> = result.categories.keys().copied().collect();
        assert_eq!(keys, Category::ALL);
    }

    #[test]
    fn test_validate_structured_data_is_a_no_op() {
        let evaluator = Evaluator::default();
        let now = Utc::now();
        let item = ContentItem::default();
        let plain = evaluator.evaluate_at(&item, &EvaluateOptions::default(), now);
        let validated = evaluator.evaluate_at(
            &item,
            &EvaluateOptions {
                validate_structured_data: true,
            },
            now,
        );
        assert_eq!(plain, validated);
    }

    #[test]
    fn test_batch_keeps_order() {
        let items = vec![
            ContentItem {
                word_count: Some(1000),
                ..Default::default()
            },
            ContentItem::default(),
        ];
        let evaluator = Evaluator::default();
        let results = evaluator.evaluate_batch(&items, &EvaluateOptions::default());
        assert_eq!(results.len(), 2);
        assert!(results[0].overall_score > results[1].overall_score);
    }
}

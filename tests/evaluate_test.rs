//! Library-level evaluation tests
//!
//! Exercises the public `evaluate` entry point end to end:
//! - Determinism and score bounds over a spread of items
//! - Word-count bucket exclusivity
//! - Issue bucket membership
//! - Reference items (empty, complete, insecure canonical, few FAQs)

use seo_guidance::config::{CategoryWeights, GuidanceConfig};
use seo_guidance::models::{Category, CheckStatus, ContentItem, EvaluateOptions, Priority};
use seo_guidance::scoring::score_category;
use seo_guidance::{evaluate, Evaluator};
use serde_json::json;

fn item_from(value: serde_json::Value) -> ContentItem {
    serde_json::from_value(value).expect("valid content item")
}

/// A spread of items covering empty, partial and complete inputs
fn sample_items() -> Vec<ContentItem> {
    vec![
        ContentItem::default(),
        item_from(json!({"content": "", "featuredImageId": null, "canonicalUrl": null})),
        item_from(json!({"title": "Short", "wordCount": 120, "faqs": [{}]})),
        item_from(json!({
            "seoTitle": "x".repeat(80),
            "seoDescription": "y".repeat(200),
            "metaRobots": "noindex, nofollow",
            "wordCount": 5000,
            "canonicalUrl": "http://example.com",
        })),
        complete_item(),
        item_from(json!({
            "content": "<p>مَرْحَبًا بِكُمْ في المدونة</p>",
            "inLanguage": "ar-EG",
            "relatedArticles": [{"id": "1"}],
            "citations": [{"url": "https://example.org"}],
            "ogArticleAuthor": "https://example.com/author",
        })),
    ]
}

/// Every analyzer passes for this item
fn complete_item() -> ContentItem {
    item_from(json!({
        "seoTitle": "x".repeat(45),
        "seoDescription": "y".repeat(140),
        "wordCount": 1000,
        "contentDepth": "comprehensive",
        "featuredImageId": "img1",
        "jsonLdStructuredData": {"@type": "Article"},
        "datePublished": "2024-05-01T00:00:00Z",
        "canonicalUrl": "https://x.com/a",
        "faqs": [
            {"question": "q1", "answer": "a1"},
            {"question": "q2", "answer": "a2"},
            {"question": "q3", "answer": "a3"},
        ],
    }))
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_evaluation_is_deterministic() {
    for item in sample_items() {
        let a = evaluate(&item, None);
        let b = evaluate(&item, None);
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.in_page_checklist, b.in_page_checklist);
    }
}

#[test]
fn test_scores_stay_in_bounds() {
    for item in sample_items() {
        let result = evaluate(&item, None);
        assert!(result.overall_score <= 100);
        for (category, score) in &result.categories {
            assert!(
                score.score >= 0.0 && score.score <= score.max_score,
                "{} scored {} of {}",
                category,
                score.score,
                score.max_score
            );
        }
    }
}

#[test]
fn test_category_max_scores_sum_to_100() {
    let result = evaluate(&ContentItem::default(), None);
    assert_eq!(result.categories.len(), 6);
    let total: f64 = result.categories.values().map(|c| c.max_score).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_invalid_weights_are_normalized() {
    let config = GuidanceConfig {
        weights: CategoryWeights {
            meta_tags: 10.0,
            content: 10.0,
            images: 10.0,
            structured_data: 10.0,
            technical: 10.0,
            mobile: 10.0,
        },
        ..Default::default()
    };
    let evaluator = Evaluator::new(config);
    let result = evaluator.evaluate(&complete_item(), &EvaluateOptions::default());
    let total: f64 = result.categories.values().map(|c| c.max_score).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(result.overall_score <= 100);
}

#[test]
fn test_extreme_weights_still_sum_to_100() {
    let configs = [
        CategoryWeights {
            meta_tags: 0.0,
            content: 0.0,
            images: 0.0,
            structured_data: 0.0,
            technical: 0.0,
            mobile: 1e-320,
        },
        CategoryWeights {
            meta_tags: 1e308,
            content: 1e308,
            images: 1e308,
            structured_data: 1e308,
            technical: 1e308,
            mobile: 1e308,
        },
    ];
    for weights in configs {
        let evaluator = Evaluator::new(GuidanceConfig {
            weights,
            ..Default::default()
        });
        let result = evaluator.evaluate(&complete_item(), &EvaluateOptions::default());
        let total: f64 = result.categories.values().map(|c| c.max_score).sum();
        assert!((total - 100.0).abs() < 1e-9, "max scores sum to {}", total);
        for score in result.categories.values() {
            assert!(score.score.is_finite() && score.score <= score.max_score);
        }
    }
}

#[test]
fn test_exactly_one_word_count_bucket() {
    let buckets = [
        "content-empty",
        "content-too-short",
        "content-short",
        "content-optimal",
        "content-long",
    ];
    let expected = [
        (0, CheckStatus::Fail),
        (1, CheckStatus::Fail),
        (299, CheckStatus::Fail),
        (300, CheckStatus::Warning),
        (799, CheckStatus::Warning),
        (800, CheckStatus::Pass),
        (3000, CheckStatus::Pass),
        (3001, CheckStatus::Info),
    ];
    for (words, status) in expected {
        let item = ContentItem {
            word_count: Some(words),
            ..Default::default()
        };
        let result = evaluate(&item, None);
        let hits: Vec<_> = result
            .in_page_checklist
            .iter()
            .filter(|i| buckets.contains(&i.id.as_str()))
            .collect();
        assert_eq!(hits.len(), 1, "wordCount {}", words);
        assert_eq!(hits[0].status, status, "wordCount {}", words);
    }
}

#[test]
fn test_empty_category_scores_zero() {
    let score = score_category(&[], 20.0);
    assert_eq!(score.score, 0.0);
    assert_eq!(score.percentage, 0);
    assert_eq!(score.passed, 0);
    assert_eq!(score.total, 0);
}

#[test]
fn test_issue_buckets_match_item_status() {
    for item in sample_items() {
        let result = evaluate(&item, None);
        let find = |code: &str| {
            result
                .in_page_checklist
                .iter()
                .find(|i| i.id == code)
                .expect("issue maps back to a checklist item")
        };
        for issue in &result.critical_issues {
            let source = find(&issue.code);
            assert_eq!(source.status, CheckStatus::Fail);
            assert_eq!(source.priority, Priority::Critical);
        }
        for issue in &result.warnings {
            assert_eq!(find(&issue.code).status, CheckStatus::Warning);
        }
        for issue in &result.suggestions {
            assert_eq!(find(&issue.code).status, CheckStatus::Info);
        }
    }
}

#[test]
fn test_checklist_follows_category_order() {
    let result = evaluate(&complete_item(), None);
    let order: Vec<usize> = result
        .in_page_checklist
        .iter()
        .map(|i| Category::ALL.iter().position(|c| *c == i.category).unwrap())
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

// ============================================================================
// Reference items
// ============================================================================

#[test]
fn test_empty_item_scores_low() {
    let item = item_from(json!({"content": "", "featuredImageId": null, "canonicalUrl": null}));
    let result = evaluate(&item, None);

    assert_eq!(result.categories[&Category::Images].score, 0.0);
    assert_eq!(result.categories[&Category::Content].score, 0.0);
    assert!(result
        .in_page_checklist
        .iter()
        .any(|i| i.id == "content-empty" && i.status == CheckStatus::Fail));

    let canonical = result
        .in_page_checklist
        .iter()
        .find(|i| i.id == "canonical-url")
        .expect("canonical check");
    assert_eq!(canonical.status, CheckStatus::Warning);
    assert_eq!(canonical.label, "Canonical URL is missing");

    assert_eq!(result.overall_score, 18);
    assert!(result.overall_score <= 40);
}

#[test]
fn test_complete_item_loses_only_mobile() {
    let result = evaluate(&complete_item(), None);

    for item in &result.in_page_checklist {
        if item.category == Category::Mobile {
            assert_eq!(item.status, CheckStatus::Info, "{}", item.id);
        } else {
            assert_eq!(item.status, CheckStatus::Pass, "{}", item.id);
        }
    }
    assert_eq!(result.categories[&Category::Mobile].score, 0.0);
    assert_eq!(result.overall_score, 95);
    assert_eq!(result.grade(), "A");
    assert!(result.critical_issues.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_minimal_complete_item_keeps_info_findings() {
    // No contentDepth and no datePublished: both surface as info
    let item = item_from(json!({
        "seoTitle": "x".repeat(45),
        "seoDescription": "y".repeat(140),
        "wordCount": 1000,
        "featuredImageId": "img1",
        "jsonLdStructuredData": {"@type": "Article"},
        "canonicalUrl": "https://x.com/a",
        "faqs": [{}, {}, {}],
    }));
    let result = evaluate(&item, None);

    assert!(result
        .in_page_checklist
        .iter()
        .all(|i| matches!(i.status, CheckStatus::Pass | CheckStatus::Info)));
    assert_eq!(result.categories[&Category::Content].score, 13.0);
    assert_eq!(result.categories[&Category::StructuredData].score, 16.0);
    assert_eq!(result.overall_score, 79);
}

#[test]
fn test_insecure_canonical_is_distinct_warning() {
    let insecure = evaluate(&item_from(json!({"canonicalUrl": "http://x.com"})), None);
    let missing = evaluate(&ContentItem::default(), None);

    let find = |r: &seo_guidance::SeoGuidanceResult| {
        r.in_page_checklist
            .iter()
            .find(|i| i.id == "canonical-url")
            .cloned()
            .expect("canonical check")
    };
    let insecure = find(&insecure);
    let missing = find(&missing);

    assert_eq!(insecure.status, CheckStatus::Warning);
    assert_eq!(insecure.priority, Priority::High);
    assert!(insecure.label.contains("HTTPS"));
    assert_ne!(insecure.label, missing.label);
}

#[test]
fn test_two_faqs_warn_with_count() {
    let result = evaluate(&item_from(json!({"faqs": [{}, {}]})), None);
    let faq = result
        .in_page_checklist
        .iter()
        .find(|i| i.id == "faq-count")
        .expect("faq check");

    assert_eq!(faq.status, CheckStatus::Warning);
    assert_eq!(faq.priority, Priority::Medium);
    assert!(faq.recommendation.contains('2'));
    assert!(result.warnings.iter().any(|w| w.code == "faq-count"));
}

#[test]
fn test_validate_structured_data_changes_nothing() {
    let item = complete_item();
    let plain = evaluate(&item, None);
    let validated = evaluate(
        &item,
        Some(EvaluateOptions {
            validate_structured_data: true,
        }),
    );
    assert_eq!(plain.overall_score, validated.overall_score);
    assert_eq!(plain.in_page_checklist, validated.in_page_checklist);
}

#[test]
fn test_off_page_guidance_always_four_in_order() {
    for item in sample_items() {
        let result = evaluate(&item, None);
        let categories: Vec<String> = result
            .off_page_guidance
            .iter()
            .map(|r| r.category.to_string())
            .collect();
        assert_eq!(
            categories,
            [
                "link-building",
                "social-signals",
                "authority-building",
                "content-distribution"
            ]
        );
    }
}

#[test]
fn test_batch_preserves_order() {
    let items = sample_items();
    let evaluator = Evaluator::default();
    let results = evaluator.evaluate_batch(&items, &EvaluateOptions::default());
    assert_eq!(results.len(), items.len());
    for (item, result) in items.iter().zip(&results) {
        assert_eq!(evaluate(item, None).overall_score, result.overall_score);
    }
}

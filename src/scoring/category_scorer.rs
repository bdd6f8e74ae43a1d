//! Category scorer
//!
//! Pure functions over checklist items; see the module docs for the
//! formula.

use crate::models::{Category, CategoryScore, CheckStatus, ChecklistItem};
use std::collections::BTreeMap;

/// Share of a pass that a warning earns
pub const WARNING_CREDIT: f64 = 0.5;

/// Score one category's items against its maximum
pub fn score_category(items: &[ChecklistItem], max_score: f64) -> CategoryScore {
    let total = items.len();
    if total == 0 {
        return CategoryScore {
            score: 0.0,
            max_score,
            percentage: 0,
            passed: 0,
            total: 0,
        };
    }

    let unit = max_score / total as f64;
    let mut passed = 0;
    let mut raw = 0.0;
    for item in items {
        match item.status {
            CheckStatus::Pass => {
                passed += 1;
                raw += unit;
            }
            CheckStatus::Warning => raw += unit * WARNING_CREDIT,
            CheckStatus::Fail | CheckStatus::Info => {}
        }
    }

    // Rounding must not lift a fractional max (normalized weights) past itself
    let score = raw.round().min(max_score).max(0.0);
    let percentage = ((passed as f64 / total as f64) * 100.0).round() as u8;

    CategoryScore {
        score,
        max_score,
        percentage,
        passed,
        total,
    }
}

/// Sum of category scores, rounded and clamped to 0..=100
pub fn overall_score(categories: &BTreeMap<Category, CategoryScore>) -> u8 {
    let sum: f64 = categories.values().map(|c| c.score).sum();
    sum.round().clamp(0.0, 100.0) as u8
}

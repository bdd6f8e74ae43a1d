//! Category Scoring System
//!
//! Reduces the checklist items of one category to a bounded score, then
//! sums the category scores into the overall score.
//!
//! # Scoring Formula
//!
//! ```text
//! unit        = max_score / total
//! score       = round(passed × unit + warnings × unit × 0.5)
//! percentage  = round(passed / total × 100)
//! overall     = clamp(round(Σ category scores), 0, 100)
//! ```
//!
//! `fail` and `info` items contribute nothing. A category with no items
//! scores zero.
//!
//! # Default Weights
//!
//! - Meta Tags: 20
//! - Content: 25
//! - Images: 15
//! - Structured Data: 20
//! - Technical: 15
//! - Mobile: 5
//!
//! # Example
//!
//! Structured data with 3 passes, 1 warning and 1 info over 20 points:
//! unit = 4, score = round(12 + 2) = 14, percentage = 60.

mod category_scorer;

pub use category_scorer::{overall_score, score_category, WARNING_CREDIT};

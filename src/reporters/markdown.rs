//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Editorial review tickets
//! - Pull request comments on content repositories
//! - Wikis and handover notes

use crate::models::{Category, CheckStatus, Issue, SeoGuidanceResult};
use crate::reporters::ReportOptions;
use anyhow::Result;

/// Render result as GitHub-flavored Markdown
pub fn render(result: &SeoGuidanceResult, options: &ReportOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(result));
    md.push('\n');

    md.push_str(&render_category_scores(result));
    md.push('\n');

    md.push_str(&render_issues("Critical Issues", &result.critical_issues));
    md.push_str(&render_issues("Warnings", &result.warnings));
    md.push_str(&render_issues("Suggestions", &result.suggestions));

    md.push_str(&render_checklist(result));
    md.push('\n');

    if options.off_page {
        md.push_str(&render_off_page(result));
        md.push('\n');
    }

    md.push_str(&render_footer(result));

    Ok(md)
}

fn render_header(result: &SeoGuidanceResult) -> String {
    let grade = result.grade();
    let grade_emoji = match grade {
        "A" => "🏆",
        "B" => "⭐",
        "C" => "⚠️",
        "D" => "❌",
        _ => "💀",
    };

    format!(
        r#"# {} SEO Guidance Report

**Grade: {}** | **Score: {}/100**

Evaluated: {}
"#,
        grade_emoji,
        grade,
        result.overall_score,
        result.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn render_category_scores(result: &SeoGuidanceResult) -> String {
    let mut md = String::from(
        "## Category Scores\n\n| Category | Score | Passed | Status |\n|----------|-------|--------|--------|\n",
    );
    for category in Category::ALL {
        let Some(score) = result.categories.get(&category) else {
            continue;
        };
        md.push_str(&format!(
            "| {} | {:.0}/{:.0} | {}/{} ({}%) | {} |\n",
            category.label(),
            score.score,
            score.max_score,
            score.passed,
            score.total,
            score.percentage,
            score_indicator(score.score, score.max_score)
        ));
    }
    md
}

fn render_issues(heading: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return String::new();
    }
    let mut md = format!("## {} ({})\n\n", heading, issues.len());
    for issue in issues {
        md.push_str(&format!(
            "- **{}** `{}` ({})\n  - {}\n",
            escape(&issue.message),
            issue.code,
            issue.category,
            escape(&issue.fix)
        ));
    }
    md.push('\n');
    md
}

fn render_checklist(result: &SeoGuidanceResult) -> String {
    let mut md = String::from(
        "## In-Page Checklist\n\n| | Check | Category | Priority | Current | Target |\n|---|-------|----------|----------|---------|--------|\n",
    );
    for item in &result.in_page_checklist {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            status_icon(item.status),
            escape(&item.label),
            item.category.label(),
            item.priority,
            item.current_value.as_deref().map(escape).unwrap_or_default(),
            item.target_value.as_deref().map(escape).unwrap_or_default(),
        ));
    }
    md
}

fn render_off_page(result: &SeoGuidanceResult) -> String {
    let mut md = String::from("## Off-Page Guidance\n\n");
    for rec in &result.off_page_guidance {
        md.push_str(&format!(
            "### {}\n\n*{} · {} priority*\n\n{}\n\n",
            rec.title, rec.category, rec.priority, rec.description
        ));
        for step in &rec.steps {
            md.push_str(&format!("1. {}\n", step));
        }
        md.push('\n');
    }
    md
}

fn render_footer(result: &SeoGuidanceResult) -> String {
    let summary = result.summary();
    format!(
        "---\n\n*{} checks: {} passed, {} warnings, {} failed, {} informational.*\n",
        summary.total, summary.pass, summary.warning, summary.fail, summary.info
    )
}

fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✅",
        CheckStatus::Warning => "⚠️",
        CheckStatus::Fail => "❌",
        CheckStatus::Info => "ℹ️",
    }
}

fn score_indicator(score: f64, max: f64) -> &'static str {
    let ratio = if max > 0.0 { score / max } else { 0.0 };
    if ratio >= 0.8 {
        "🟢 Good"
    } else if ratio >= 0.5 {
        "🟡 Fair"
    } else {
        "🔴 Poor"
    }
}

/// Keep table cells intact
fn escape(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

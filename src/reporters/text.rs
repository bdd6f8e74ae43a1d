//! Text (terminal) reporter with colors and formatting

use crate::models::{Category, CheckStatus, Issue, SeoGuidanceResult};
use crate::reporters::ReportOptions;
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

/// Status colors
fn status_color(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "\x1b[32m",    // Green
        CheckStatus::Warning => "\x1b[33m", // Yellow
        CheckStatus::Fail => "\x1b[31m",    // Red
        CheckStatus::Info => "\x1b[90m",    // Gray
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Status tag
fn status_tag(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "[✓]",
        CheckStatus::Warning => "[!]",
        CheckStatus::Fail => "[✗]",
        CheckStatus::Info => "[i]",
    }
}

/// ANSI codes that collapse to nothing when color is off
struct Palette {
    color: bool,
}

impl Palette {
    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

/// Render result as formatted terminal output
pub fn render(result: &SeoGuidanceResult, options: &ReportOptions) -> Result<String> {
    let p = Palette {
        color: options.color,
    };
    let (bold, dim, reset) = (p.paint(BOLD), p.paint(DIM), p.paint(RESET));
    let mut out = String::new();

    // Header
    let grade = result.grade();
    let grade_c = p.paint(grade_color(grade));
    out.push_str(&format!("\n{bold}SEO Guidance{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    let summary = result.summary();
    out.push_str(&format!(
        "Score: {bold}{}/100{reset}  Grade: {grade_c}{bold}{}{reset}  ",
        result.overall_score, grade
    ));
    out.push_str(&format!(
        "Checks: {} passed of {}\n\n",
        summary.pass, summary.total
    ));

    // Category scores
    out.push_str(&format!("{bold}CATEGORIES{reset}\n"));
    for category in Category::ALL {
        let Some(score) = result.categories.get(&category) else {
            continue;
        };
        let color = p.paint(score_color(score.score, score.max_score));
        out.push_str(&format!(
            "  {:<16} {color}{:>3.0}{reset}/{:<3.0} {dim}{:>3}% passed ({}/{}){reset}\n",
            category.label(),
            score.score,
            score.max_score,
            score.percentage,
            score.passed,
            score.total
        ));
    }
    out.push('\n');

    // Issue buckets
    render_issues(&mut out, &p, "CRITICAL", CheckStatus::Fail, &result.critical_issues);
    render_issues(&mut out, &p, "WARNINGS", CheckStatus::Warning, &result.warnings);
    render_issues(&mut out, &p, "SUGGESTIONS", CheckStatus::Info, &result.suggestions);

    if options.off_page && !result.off_page_guidance.is_empty() {
        out.push_str(&format!("{bold}OFF-PAGE{reset}\n"));
        for rec in &result.off_page_guidance {
            out.push_str(&format!(
                "  • {} {dim}({}, {}){reset}\n",
                rec.title, rec.category, rec.priority
            ));
        }
        out.push('\n');
    }

    // Tips based on grade
    match grade {
        "A" => out.push_str(&format!("{dim}Ready to publish.{reset}\n")),
        "B" => out.push_str(&format!(
            "{dim}Good shape. Clear the warnings for an A.{reset}\n"
        )),
        _ => out.push_str(&format!(
            "{dim}Fix critical issues first; they cost the most points.{reset}\n"
        )),
    }

    Ok(out)
}

fn render_issues(
    out: &mut String,
    p: &Palette,
    heading: &str,
    status: CheckStatus,
    issues: &[Issue],
) {
    if issues.is_empty() {
        return;
    }
    let (bold, dim, reset) = (p.paint(BOLD), p.paint(DIM), p.paint(RESET));
    let color = p.paint(status_color(status));
    out.push_str(&format!("{bold}{heading}{reset} ({})\n", issues.len()));
    for issue in issues {
        out.push_str(&format!(
            "  {color}{}{reset} {}  {dim}[{}]{reset}\n",
            status_tag(status),
            issue.message,
            issue.category
        ));
        out.push_str(&format!("      {dim}→ {}{reset}\n", issue.fix));
    }
    out.push('\n');
}

fn score_color(score: f64, max: f64) -> &'static str {
    let ratio = if max > 0.0 { score / max } else { 0.0 };
    if ratio >= 0.8 {
        "\x1b[32m"
    } else if ratio >= 0.5 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    }
}

//! Analyze command - evaluate content items and report

use anyhow::{Context, Result};
use console::style;
use seo_guidance::config::GuidanceConfig;
use seo_guidance::input::load_items;
use seo_guidance::models::{EvaluateOptions, SeoGuidanceResult};
use seo_guidance::pipeline::Evaluator;
use seo_guidance::reporters::{report_batch, OutputFormat, ReportOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Run the analyze command
pub fn run(
    config: GuidanceConfig,
    input: &Path,
    format: Option<&str>,
    output_path: Option<&Path>,
    validate_structured_data: bool,
    fail_below: Option<u8>,
    no_off_page: bool,
) -> Result<()> {
    // Flags win over the config file's [defaults]
    let format_name = format
        .map(str::to_string)
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;
    let fail_below = fail_below.or(config.defaults.fail_below);

    let items = load_items(input)?;
    debug!("Loaded {} item(s) from {}", items.len(), input.display());

    let evaluator = Evaluator::new(config);
    let options = EvaluateOptions {
        validate_structured_data,
    };
    let results = evaluator.evaluate_batch(&items, &options);

    let report_options = ReportOptions {
        off_page: !no_off_page,
        color: output_path.is_none() && console::colors_enabled(),
    };
    let rendered = report_batch(&results, format, &report_options)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            // stderr keeps stdout clean for piping
            eprintln!(
                "{} Report written to: {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", rendered),
    }

    check_fail_threshold(fail_below, &results);
    Ok(())
}

/// Exit with code 1 when any item scores below the threshold
fn check_fail_threshold(fail_below: Option<u8>, results: &[SeoGuidanceResult]) {
    let Some(threshold) = fail_below else {
        return;
    };
    let failing = items_below(threshold, results);
    if failing.is_empty() {
        return;
    }
    for (index, score) in &failing {
        eprintln!(
            "{} Item {} scored {} (below {})",
            style("✗").red(),
            index + 1,
            style(score).red().bold(),
            threshold
        );
    }
    eprintln!("Failing due to --fail-below={} threshold", threshold);
    std::process::exit(1);
}

/// Positions and scores of items under the threshold
fn items_below(threshold: u8, results: &[SeoGuidanceResult]) -> Vec<(usize, u8)> {
    results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.overall_score < threshold)
        .map(|(i, r)| (i, r.overall_score))
        .collect()
}

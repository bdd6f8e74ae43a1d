//! Output reporters for SEO guidance results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::SeoGuidanceResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Rendering switches shared by the human-readable formats
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Include the off-page guidance section
    pub off_page: bool,
    /// Emit ANSI colors (text only)
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            off_page: true,
            color: true,
        }
    }
}

/// Render a result in the specified format
pub fn report(result: &SeoGuidanceResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt, &ReportOptions::default())
}

/// Render a result using an OutputFormat enum
pub fn report_with_format(
    result: &SeoGuidanceResult,
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result, options),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => markdown::render(result, options),
    }
}

/// Render several results. JSON becomes an array; the other formats are
/// rendered one after another.
pub fn report_batch(
    results: &[SeoGuidanceResult],
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<String> {
    if let [single] = results {
        return report_with_format(single, format, options);
    }
    match format {
        OutputFormat::Json => json::render_many(results),
        OutputFormat::Text | OutputFormat::Markdown => {
            let separator = if format == OutputFormat::Markdown {
                "\n---\n\n"
            } else {
                "\n"
            };
            let rendered = results
                .iter()
                .map(|r| report_with_format(r, format, options))
                .collect::<Result<Vec<_>>>()?;
            Ok(rendered.join(separator))
        }
    }
}

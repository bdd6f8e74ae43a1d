//! Thresholds command - show the configuration evaluations will use

use anyhow::{Context, Result};
use seo_guidance::config::GuidanceConfig;
use seo_guidance::pipeline::Evaluator;

/// Print the effective config as TOML
pub fn run(config: GuidanceConfig) -> Result<()> {
    // Evaluator applies weight normalization, so print what it holds
    let evaluator = Evaluator::new(config);
    let rendered =
        toml::to_string_pretty(evaluator.config()).context("Failed to serialize config")?;
    print!("{}", rendered);
    Ok(())
}

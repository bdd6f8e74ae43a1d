//! Project-level configuration support
//!
//! Loads configuration from `seo-guidance.toml` or `.seo-guidance.json`
//! in a directory, or from an explicit file path.
//!
//! # Configuration Format
//!
//! ```toml
//! # seo-guidance.toml
//! default_language = "ar"
//!
//! [thresholds]
//! title_min = 30
//! title_max = 60
//! description_min = 120
//! description_max = 160
//! word_count_min = 300
//! word_count_good = 800
//! word_count_max = 3000
//! faq_min = 3
//!
//! [weights]
//! meta_tags = 20
//! content = 25
//! images = 15
//! structured_data = 20
//! technical = 15
//! mobile = 5
//!
//! [defaults]
//! format = "text"
//! fail_below = 60
//! ```

use crate::models::Category;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Preferred config file name
pub const CONFIG_FILE_NAME: &str = "seo-guidance.toml";

/// Language used for word counting when the item doesn't declare one
pub const DEFAULT_LANGUAGE: &str = "ar";

/// Full configuration for an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuidanceConfig {
    /// Fallback language code for word counting
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Analyzer thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Category weights (must sum to 100)
    #[serde(default)]
    pub weights: CategoryWeights,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            thresholds: Thresholds::default(),
            weights: CategoryWeights::default(),
            defaults: CliDefaults::default(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl GuidanceConfig {
    /// Warn about values that load but can't work as intended.
    ///
    /// A `fail_below` above 100 would fail every item, so it is dropped.
    /// Inverted threshold pairs are kept as written.
    pub fn validate(&mut self) {
        if let Some(threshold) = self.defaults.fail_below {
            if threshold > 100 {
                warn!(
                    "defaults.fail_below = {} is outside 0-100; ignoring it",
                    threshold
                );
                self.defaults.fail_below = None;
            }
        }
        for problem in self.thresholds.problems() {
            warn!("Inconsistent thresholds: {}", problem);
        }
    }
}

/// Length and count thresholds used by the field analyzers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    /// Titles shorter than this warn
    #[serde(default = "default_title_min")]
    pub title_min: usize,
    /// Titles longer than this warn
    #[serde(default = "default_title_max")]
    pub title_max: usize,
    #[serde(default = "default_description_min")]
    pub description_min: usize,
    #[serde(default = "default_description_max")]
    pub description_max: usize,
    /// Below this the body is too thin and fails
    #[serde(default = "default_word_count_min")]
    pub word_count_min: u64,
    /// From this up to `word_count_max` the body passes
    #[serde(default = "default_word_count_good")]
    pub word_count_good: u64,
    /// Above this the body is flagged as long-form
    #[serde(default = "default_word_count_max")]
    pub word_count_max: u64,
    /// FAQ entries needed for a pass
    #[serde(default = "default_faq_min")]
    pub faq_min: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            title_min: default_title_min(),
            title_max: default_title_max(),
            description_min: default_description_min(),
            description_max: default_description_max(),
            word_count_min: default_word_count_min(),
            word_count_good: default_word_count_good(),
            word_count_max: default_word_count_max(),
            faq_min: default_faq_min(),
        }
    }
}

impl Thresholds {
    /// Every min/max pair is in order
    pub fn is_valid(&self) -> bool {
        self.problems().is_empty()
    }

    /// Human-readable description of each inverted pair
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.title_min > self.title_max {
            problems.push(format!(
                "title_min ({}) is above title_max ({})",
                self.title_min, self.title_max
            ));
        }
        if self.description_min > self.description_max {
            problems.push(format!(
                "description_min ({}) is above description_max ({})",
                self.description_min, self.description_max
            ));
        }
        if self.word_count_min > self.word_count_good {
            problems.push(format!(
                "word_count_min ({}) is above word_count_good ({})",
                self.word_count_min, self.word_count_good
            ));
        }
        if self.word_count_good > self.word_count_max {
            problems.push(format!(
                "word_count_good ({}) is above word_count_max ({})",
                self.word_count_good, self.word_count_max
            ));
        }
        problems
    }
}

fn default_title_min() -> usize {
    30
}
fn default_title_max() -> usize {
    60
}
fn default_description_min() -> usize {
    120
}
fn default_description_max() -> usize {
    160
}
fn default_word_count_min() -> u64 {
    300
}
fn default_word_count_good() -> u64 {
    800
}
fn default_word_count_max() -> u64 {
    3000
}
fn default_faq_min() -> usize {
    3
}

/// Maximum score of each category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWeights {
    #[serde(default = "default_meta_tags_weight")]
    pub meta_tags: f64,
    #[serde(default = "default_content_weight")]
    pub content: f64,
    #[serde(default = "default_images_weight")]
    pub images: f64,
    #[serde(default = "default_structured_data_weight")]
    pub structured_data: f64,
    #[serde(default = "default_technical_weight")]
    pub technical: f64,
    #[serde(default = "default_mobile_weight")]
    pub mobile: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            meta_tags: default_meta_tags_weight(),
            content: default_content_weight(),
            images: default_images_weight(),
            structured_data: default_structured_data_weight(),
            technical: default_technical_weight(),
            mobile: default_mobile_weight(),
        }
    }
}

fn default_meta_tags_weight() -> f64 {
    20.0
}
fn default_content_weight() -> f64 {
    25.0
}
fn default_images_weight() -> f64 {
    15.0
}
fn default_structured_data_weight() -> f64 {
    20.0
}
fn default_technical_weight() -> f64 {
    15.0
}
fn default_mobile_weight() -> f64 {
    5.0
}

impl CategoryWeights {
    /// Weight (max score) for a category
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::MetaTags => self.meta_tags,
            Category::Content => self.content,
            Category::Images => self.images,
            Category::StructuredData => self.structured_data,
            Category::Technical => self.technical,
            Category::Mobile => self.mobile,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::MetaTags => &mut self.meta_tags,
            Category::Content => &mut self.content,
            Category::Images => &mut self.images,
            Category::StructuredData => &mut self.structured_data,
            Category::Technical => &mut self.technical,
            Category::Mobile => &mut self.mobile,
        }
    }

    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Validate that weights are non-negative and sum to 100 (with tolerance)
    pub fn is_valid(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c) >= 0.0) && (self.total() - 100.0).abs() < 0.001
    }

    /// Clamp negatives and non-finite values to zero and rescale so the
    /// weights sum to 100. All-zero weights fall back to the defaults.
    pub fn normalize(&mut self) {
        for category in Category::ALL {
            let w = self.get_mut(category);
            if *w < 0.0 || !w.is_finite() {
                *w = 0.0;
            }
        }
        let max = Category::ALL
            .iter()
            .map(|c| self.get(*c))
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            *self = Self::default();
            return;
        }
        // Into 0..=1 first; the sum must stay finite and non-zero
        for category in Category::ALL {
            *self.get_mut(category) /= max;
        }
        let sum = self.total();
        for category in Category::ALL {
            let w = self.get_mut(category);
            *w = *w / sum * 100.0;
        }
    }
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Exit non-zero when an item scores below this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_below: Option<u8>,
}

/// Load configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `seo-guidance.toml`
/// 2. `.seo-guidance.json`
///
/// Returns default configuration if no config file is found or a file
/// fails to parse.
pub fn load_guidance_config(dir: &Path) -> GuidanceConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(".seo-guidance.json");
    if json_path.exists() {
        match load_config_file(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", json_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    GuidanceConfig::default()
}

/// Load configuration from an explicit file. JSON when the extension is
/// `.json`, TOML otherwise.
pub fn load_config_file(path: &Path) -> anyhow::Result<GuidanceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let mut config: GuidanceConfig = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    } else {
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))?
    };
    config.validate();
    Ok(config)
}

/// Commented starter config written by `seo-guidance init`
pub fn example_config() -> &'static str {
    r#"# SEO guidance configuration
# Every value below is the built-in default; delete what you don't change.

# Language used for word counting when an item has no inLanguage
default_language = "ar"

[thresholds]
# SEO title length (characters): warn below min, warn above max
title_min = 30
title_max = 60
# Meta description length (characters)
description_min = 120
description_max = 160
# Body length (words): fail below min, warn below good, info above max
word_count_min = 300
word_count_good = 800
word_count_max = 3000
# FAQ entries needed for a pass
faq_min = 3

[weights]
# Maximum points per category; must sum to 100
meta_tags = 20
content = 25
images = 15
structured_data = 20
technical = 15
mobile = 5

[defaults]
# format = "text"
# fail_below = 60
"#
}

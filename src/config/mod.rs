//! Configuration module for SEO guidance
//!
//! This module handles:
//! - Project-level configuration (seo-guidance.toml)
//! - Threshold overrides for the field analyzers
//! - Category weight customization
//! - CLI defaults

mod guidance_config;

pub use guidance_config::{
    example_config,
    load_config_file,
    load_guidance_config,
    CategoryWeights,
    CliDefaults,
    GuidanceConfig,
    Thresholds,
    CONFIG_FILE_NAME,
    DEFAULT_LANGUAGE,
};

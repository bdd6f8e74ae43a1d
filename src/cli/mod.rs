//! CLI command definitions and handlers

mod analyze;
mod init;
mod thresholds;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seo_guidance::config::{load_config_file, load_guidance_config, GuidanceConfig};
use std::path::{Path, PathBuf};

/// SEO guidance for editorial content
///
/// Scores blog posts and articles against search-engine best practices.
#[derive(Parser, Debug)]
#[command(name = "seo-guidance")]
#[command(
    version,
    about = "Score editorial content for SEO and get a prioritized checklist",
    after_help = "\
Examples:
  seo-guidance analyze post.json                     Text report for one item
  seo-guidance analyze posts.json --format json      JSON array for scripting
  seo-guidance analyze - --format md < post.json     Read from stdin
  seo-guidance analyze post.json --fail-below 70     Exit code 1 below 70 (CI mode)
  seo-guidance init                                  Write seo-guidance.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: seo-guidance.toml or .seo-guidance.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one content item or a JSON array of items
    Analyze {
        /// JSON file with the item(s), or - for stdin
        input: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Request structured data validation
        #[arg(long)]
        validate_structured_data: bool,

        /// Exit with code 1 if any item scores below this (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_below: Option<u8>,

        /// Leave off-page guidance out of text and markdown output
        #[arg(long)]
        no_off_page: bool,
    },

    /// Write a seo-guidance.toml with the default settings
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective thresholds and weights as TOML
    Thresholds,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            validate_structured_data,
            fail_below,
            no_off_page,
        } => {
            let config = load_config(cli.config.as_deref())?;
            analyze::run(
                config,
                &input,
                format.as_deref(),
                output.as_deref(),
                validate_structured_data,
                fail_below,
                no_off_page,
            )
        }
        Commands::Init { path, force } => init::run(&path, force),
        Commands::Thresholds => {
            let config = load_config(cli.config.as_deref())?;
            thresholds::run(config)
        }
    }
}

/// An explicit `--config` must load; a discovered one falls back to defaults
fn load_config(explicit: Option<&Path>) -> Result<GuidanceConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(load_guidance_config(&cwd))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_flags_parse() {
        let cli = Cli::try_parse_from([
            "seo-guidance",
            "analyze",
            "post.json",
            "-f",
            "md",
            "--fail-below",
            "70",
            "--no-off-page",
        ])
        .expect("parse");
        match cli.command {
            Commands::Analyze {
                input,
                format,
                fail_below,
                no_off_page,
                ..
            } => {
                assert_eq!(input, PathBuf::from("post.json"));
                assert_eq!(format.as_deref(), Some("md"));
                assert_eq!(fail_below, Some(70));
                assert!(no_off_page);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_fail_below_out_of_range_rejected() {
        let parsed =
            Cli::try_parse_from(["seo-guidance", "analyze", "post.json", "--fail-below", "101"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["seo-guidance", "thresholds", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
    }
}

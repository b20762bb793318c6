//! Command-line argument definitions for the recipe importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the recipe importer
///
/// Extracts recipes from loosely structured Excel workbooks and loads them
/// into a REST record store, then fills in nutrition from a nutrient workbook.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recipe-importer",
    version,
    about = "Import recipes from Excel workbooks into a recipe store",
    long_about = "Reconstructs recipes from spreadsheet exports where each recipe is a visual \
                  block of rows (name, category, metadata and a numbered ingredient table), \
                  uploads them in batches to a REST record store, and enriches stored recipes \
                  with nutrition data from a nutrient workbook."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract recipes from a recipe workbook and create them in the store
    Import(ImportArgs),
    /// Fill in nutrition for stored recipes from a nutrient workbook
    Enrich(EnrichArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Recipe workbook (.xlsx)
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Worksheet holding the recipes
    ///
    /// Defaults to the configured recipe sheet ("Recipes").
    #[arg(long = "sheet", value_name = "NAME", help = "Worksheet holding the recipes")]
    pub sheet: Option<String>,

    /// Label in column B that opens each recipe's metadata block
    #[arg(
        long = "sentinel",
        value_name = "LABEL",
        help = "Marker label that opens each recipe block"
    )]
    pub sentinel: Option<String>,

    /// Records per create request
    #[arg(
        short = 'b',
        long = "batch-size",
        value_name = "COUNT",
        help = "Records per create request"
    )]
    pub batch_size: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the enrich command
#[derive(Debug, Clone, Parser)]
pub struct EnrichArgs {
    /// Nutrient workbook (.xlsx)
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Worksheet holding the nutrient table
    ///
    /// Defaults to the configured nutrient sheet ("Sheet1").
    #[arg(long = "sheet", value_name = "NAME", help = "Worksheet holding the nutrient table")]
    pub sheet: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Flags shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/recipe-importer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Record store base URL (overrides RECIPE_STORE_URL)
    #[arg(long = "store-url", value_name = "URL", help = "Record store base URL")]
    pub store_url: Option<String>,

    /// Owner email stamped on imported records (overrides RECIPE_OWNER_EMAIL)
    #[arg(long = "owner", value_name = "EMAIL", help = "Owner email for the records")]
    pub owner: Option<String>,

    /// Show what would be written without contacting the store for writes
    #[arg(long = "dry-run", help = "Preview results without writing to the store")]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
    pub yes: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl CommonArgs {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode or JSON output)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// JSON output keeps stdout machine-readable, so writes cannot be confirmed interactively
    pub fn validate(&self) -> Result<()> {
        if self.output_format == OutputFormat::Json && !self.dry_run && !self.yes {
            return Err(Error::configuration(
                "--output-format json requires --yes or --dry-run".to_string(),
            ));
        }
        Ok(())
    }
}

/// Check that a workbook argument points at an existing file
fn validate_workbook_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Workbook does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Workbook path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_workbook_path(&self.workbook)?;
        self.common.validate()?;

        if self.batch_size == Some(0) {
            return Err(Error::configuration(
                "Batch size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl EnrichArgs {
    /// Validate the enrich command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_workbook_path(&self.workbook)?;
        self.common.validate()
    }
}

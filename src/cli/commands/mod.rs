//! Command implementations for the recipe importer CLI
//!
//! Each command is implemented in its own module; shared logging,
//! configuration and reporting helpers live in `shared`.

pub mod enrich;
pub mod import;
pub mod shared;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `import`: extract recipes from a workbook and create them in the store
/// - `enrich`: fill in nutrition for stored recipes from a nutrient workbook
pub async fn run(args: Args) -> Result<CommandStats> {
    match args.command {
        Some(Commands::Import(import_args)) => import::run_import(import_args).await,
        Some(Commands::Enrich(enrich_args)) => enrich::run_enrich(enrich_args).await,
        None => Err(Error::configuration("No command given")),
    }
}

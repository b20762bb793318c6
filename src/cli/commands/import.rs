//! Import command implementation
//!
//! Loads the recipe sheet, reconstructs recipes, previews them, and uploads
//! them to the record store in batches.

use super::shared::{
    CommandStats, confirm_writes, create_progress_bar, load_configuration, print_json,
    setup_logging,
};
use crate::app::models::Record;
use crate::app::services::id_generator::TimestampIdGenerator;
use crate::app::services::recipe_extractor::{ExtractionResult, ExtractionStats, RecipeExtractor};
use crate::app::services::record_store::{
    RestRecordStore, UploadSummary, recipe_payload, upload_records,
};
use crate::app::services::workbook::load_sheet;
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::config::Config;
use crate::Result;
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Machine-readable import report
#[derive(Debug, Serialize)]
struct ImportReport<'a> {
    workbook: String,
    sheet: &'a str,
    extraction: &'a ExtractionStats,
    categories: Vec<(String, usize)>,
    recipes: Vec<RecipeLine<'a>>,
    upload: Option<&'a UploadSummary>,
    stats: &'a CommandStats,
}

#[derive(Debug, Serialize)]
struct RecipeLine<'a> {
    name: &'a str,
    category: &'a str,
    ingredients: usize,
    total_yield_grams: f64,
}

impl<'a> From<&'a Record> for RecipeLine<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            name: &record.name,
            category: record.category_or_empty(),
            ingredients: record.line_item_count(),
            total_yield_grams: record.serving.total_yield_grams,
        }
    }
}

/// Import command runner
///
/// 1. Set up logging and configuration
/// 2. Load the recipe sheet and extract recipes
/// 3. Preview the result (and stop here on a dry run)
/// 4. Confirm, then upload in batches
pub async fn run_import(args: ImportArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting recipe import");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = apply_import_overrides(load_configuration(&args.common)?, &args);

    let sheet = config.extraction.recipe_sheet.as_str();
    let grid = load_sheet(&args.workbook, sheet)?;
    info!(
        "Loaded sheet '{}' with {} rows from {}",
        sheet,
        grid.row_count(),
        args.workbook.display()
    );

    let extractor = RecipeExtractor::new(config.extraction.sentinel_label.clone());
    let extraction = extractor.extract(&grid, &mut TimestampIdGenerator::new());

    let mut stats = CommandStats {
        records_found: extraction.record_count(),
        writes_skipped: true,
        ..Default::default()
    };

    let human = args.common.output_format == OutputFormat::Human;
    if human {
        print_extraction_preview(&extraction, args.common.dry_run);
    }

    let upload = if args.common.dry_run || extraction.records.is_empty() {
        None
    } else {
        confirm_and_upload(&args, &config, &extraction).await?
    };

    if let Some(summary) = &upload {
        stats.records_written = summary.inserted;
        stats.records_failed = summary.failed;
        stats.writes_skipped = false;
    }
    stats.processing_time = start_time.elapsed();

    match args.common.output_format {
        OutputFormat::Human => print_human_report(&stats, upload.as_ref()),
        OutputFormat::Json => print_json(&ImportReport {
            workbook: args.workbook.display().to_string(),
            sheet,
            extraction: &extraction.stats,
            categories: extraction.category_counts(),
            recipes: extraction.records.iter().map(RecipeLine::from).collect(),
            upload: upload.as_ref(),
            stats: &stats,
        })?,
    }

    Ok(stats)
}

/// Apply import-specific CLI overrides
fn apply_import_overrides(mut config: Config, args: &ImportArgs) -> Config {
    if let Some(sheet) = &args.sheet {
        config = config.with_recipe_sheet(sheet.clone());
    }
    if let Some(sentinel) = &args.sentinel {
        config = config.with_sentinel_label(sentinel.clone());
    }
    if let Some(batch_size) = args.batch_size {
        config = config.with_batch_size(batch_size);
    }
    config
}

/// Confirm and upload; `None` when the user declines
async fn confirm_and_upload(
    args: &ImportArgs,
    config: &Config,
    extraction: &ExtractionResult,
) -> Result<Option<UploadSummary>> {
    config.validate_store()?;
    let owner = config.owner_email()?;
    let record_count = extraction.record_count();

    let prompt = format!("Insert {} recipes for {}?", record_count, owner);
    if !confirm_writes(&args.common, &prompt)? {
        info!("Import aborted by user");
        eprintln!("Aborted.");
        return Ok(None);
    }

    let payloads: Vec<_> = extraction
        .records
        .iter()
        .map(|record| recipe_payload(record, owner))
        .collect();

    let store = RestRecordStore::from_config(&config.store)?;
    info!("Uploading {} recipes to {}", record_count, store.table_url());

    let progress_bar = if args.common.show_progress() {
        Some(create_progress_bar(record_count as u64, "Uploading recipes")?)
    } else {
        None
    };

    let summary = upload_records(
        &store,
        &payloads,
        config.store.batch_size,
        config.store.batch_delay(),
        progress_bar.as_ref(),
    )
    .await;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Upload complete");
    }

    Ok(Some(summary))
}

/// Print categories and sample recipes before anything is written
fn print_extraction_preview(extraction: &ExtractionResult, dry_run: bool) {
    let stats = &extraction.stats;

    println!("\n{}", "Extraction Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Markers found:".bright_cyan(),
        stats.markers_found.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Recipes extracted:".bright_cyan(),
        stats.records_extracted.to_string().bright_white().bold()
    );
    if stats.dropped() > 0 {
        println!(
            "  {} {}",
            "Markers dropped:".bright_yellow(),
            stats.dropped().to_string().bright_yellow()
        );
    }
    if stats.malformed_line_item_rows > 0 {
        println!(
            "  {} {}",
            "Truncated ingredient tables:".bright_yellow(),
            stats.malformed_line_item_rows.to_string().bright_yellow()
        );
    }
    for message in &stats.messages {
        println!("    - {}", message.dimmed());
    }

    println!("\n{}", "Categories".bright_green().bold());
    for (category, count) in extraction.category_counts() {
        println!("  {}: {} recipes", category.bright_cyan(), count);
    }

    println!("\n{}", "Sample recipes".bright_green().bold());
    let mut shown = std::collections::HashSet::new();
    for record in &extraction.records {
        if shown.insert(record.category_or_empty()) {
            print_recipe_line(record);
        }
    }

    if dry_run {
        println!("\n{}", "DRY RUN - not inserting into the store".bright_yellow().bold());
        for (index, record) in extraction.records.iter().enumerate() {
            print!("  {}. ", index + 1);
            print_recipe_line(record);
        }
    }
}

fn print_recipe_line(record: &Record) {
    println!(
        "  [{}] {} ({} ingredients, yield: {}g)",
        record.category_or_empty(),
        record.name.bright_white(),
        record.line_item_count(),
        record.serving.total_yield_grams
    );
}

/// Generate human-readable report
fn print_human_report(stats: &CommandStats, upload: Option<&UploadSummary>) {
    println!("\n{}", "Import Summary".bright_green().bold());
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_secs_f64()
    );
    println!(
        "  {} {}",
        "Recipes found:".bright_cyan(),
        stats.records_found.to_string().bright_white()
    );

    match upload {
        Some(summary) => {
            println!(
                "  {} {}",
                "Inserted:".bright_cyan(),
                summary.inserted.to_string().bright_white().bold()
            );
            if summary.failed > 0 {
                println!(
                    "  {} {}",
                    "Failed:".bright_red(),
                    summary.failed.to_string().bright_red().bold()
                );
                for failure in &summary.failures {
                    let status = failure
                        .status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("    - {} [{}] {}", failure.name, status, failure.message);
                }
            }
        }
        None => println!("  {}", "Nothing written".bright_yellow()),
    }
    println!();
}

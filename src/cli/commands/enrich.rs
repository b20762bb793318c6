//! Enrich command implementation
//!
//! Reads the nutrient sheet, finds stored recipes without per-serving
//! nutrition, matches them to nutrient profiles and patches them.

use super::shared::{
    CommandStats, confirm_writes, create_progress_bar, load_configuration, print_json,
    setup_logging,
};
use crate::app::services::enrichment::{
    MatchReport, build_update_payload, match_recipes, select_missing_nutrition,
};
use crate::app::services::nutrient_sheet::parse_nutrient_sheet;
use crate::app::services::record_store::{
    PendingUpdate, RecordStore, RestRecordStore, UpdateSummary, apply_updates,
};
use crate::app::services::workbook::load_sheet;
use crate::cli::args::{EnrichArgs, OutputFormat};
use crate::config::Config;
use crate::Result;
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Unmatched recipes listed in the human report
const UNMATCHED_PREVIEW_LIMIT: usize = 20;

/// Machine-readable enrich report
#[derive(Debug, Serialize)]
struct EnrichReport<'a> {
    workbook: String,
    nutrient_profiles: usize,
    recipes_missing_nutrition: usize,
    matched: Vec<&'a str>,
    unmatched: Vec<&'a str>,
    update: Option<&'a UpdateSummary>,
    stats: &'a CommandStats,
}

/// Enrich command runner
///
/// 1. Set up logging and configuration
/// 2. Parse the nutrient sheet
/// 3. Fetch stored recipes and keep those missing nutrition
/// 4. Match, preview, confirm and patch
pub async fn run_enrich(args: EnrichArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting nutrition enrichment");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let mut config = load_configuration(&args.common)?;
    if let Some(sheet) = &args.sheet {
        config = config.with_nutrient_sheet(sheet.clone());
    }
    config.validate_store()?;

    let grid = load_sheet(&args.workbook, &config.extraction.nutrient_sheet)?;
    let table = parse_nutrient_sheet(&grid);

    let store = RestRecordStore::from_config(&config.store)?;
    let owner = config.owner_email()?;
    info!("Fetching recipes for {} from {}", owner, store.table_url());
    let recipes = store.fetch_owner_recipes(owner).await?;

    let missing = select_missing_nutrition(recipes);
    let missing_count = missing.len();
    let report = match_recipes(missing, &table);

    let mut stats = CommandStats {
        records_found: table.len(),
        writes_skipped: true,
        ..Default::default()
    };

    if args.common.output_format == OutputFormat::Human {
        print_match_preview(table.len(), missing_count, &report, args.common.dry_run);
    }

    let update = if args.common.dry_run || report.matched.is_empty() {
        None
    } else {
        confirm_and_update(&args, &config, &store, &report).await?
    };

    if let Some(summary) = &update {
        stats.records_written = summary.updated;
        stats.records_failed = summary.failed;
        stats.writes_skipped = false;
    }
    stats.processing_time = start_time.elapsed();

    match args.common.output_format {
        OutputFormat::Human => print_human_report(&stats, update.as_ref()),
        OutputFormat::Json => print_json(&EnrichReport {
            workbook: args.workbook.display().to_string(),
            nutrient_profiles: table.len(),
            recipes_missing_nutrition: missing_count,
            matched: report
                .matched
                .iter()
                .map(|m| m.recipe.name.as_str())
                .collect(),
            unmatched: report.unmatched.iter().map(|r| r.name.as_str()).collect(),
            update: update.as_ref(),
            stats: &stats,
        })?,
    }

    Ok(stats)
}

/// Confirm and patch every matched recipe; `None` when the user declines
async fn confirm_and_update(
    args: &EnrichArgs,
    config: &Config,
    store: &RestRecordStore,
    report: &MatchReport,
) -> Result<Option<UpdateSummary>> {
    let prompt = format!(
        "Update {} recipes with nutrition data?",
        report.matched_count()
    );
    if !confirm_writes(&args.common, &prompt)? {
        info!("Enrichment aborted by user");
        eprintln!("Aborted.");
        return Ok(None);
    }

    let updates: Vec<PendingUpdate> = report
        .matched
        .iter()
        .map(|m| PendingUpdate {
            recipe_id: m.recipe.id.clone(),
            recipe_name: m.recipe.name.clone(),
            payload: build_update_payload(&m.recipe, &m.profile),
        })
        .collect();

    let progress_bar = if args.common.show_progress() {
        Some(create_progress_bar(updates.len() as u64, "Updating recipes")?)
    } else {
        None
    };

    let summary = apply_updates(
        store,
        &updates,
        config.store.update_progress_interval,
        config.store.update_pause(),
        progress_bar.as_ref(),
    )
    .await;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Updates complete");
    }

    Ok(Some(summary))
}

/// Print match counts, unmatched recipes and a sample payload
fn print_match_preview(profiles: usize, missing: usize, report: &MatchReport, dry_run: bool) {
    println!("\n{}", "Match Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Nutrient profiles:".bright_cyan(),
        profiles.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Recipes missing nutrition:".bright_cyan(),
        missing.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Matched:".bright_cyan(),
        report.matched_count().to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Unmatched:".bright_yellow(),
        report.unmatched_count().to_string().bright_yellow()
    );

    if !report.unmatched.is_empty() {
        println!("\n{}", "Unmatched recipes (no nutrient data available)".bright_yellow());
        for recipe in report.unmatched.iter().take(UNMATCHED_PREVIEW_LIMIT) {
            println!(
                "  - [{}] {}",
                recipe.category.as_deref().unwrap_or_default(),
                recipe.name
            );
        }
        if report.unmatched.len() > UNMATCHED_PREVIEW_LIMIT {
            println!(
                "  ... and {} more",
                report.unmatched.len() - UNMATCHED_PREVIEW_LIMIT
            );
        }
    }

    if let Some(sample) = report.matched.first() {
        let payload = build_update_payload(&sample.recipe, &sample.profile);
        let nutrient_names: Vec<&str> = sample
            .profile
            .per_serving
            .keys()
            .map(String::as_str)
            .take(10)
            .collect();

        println!(
            "\n{} '{}'",
            "Sample update for".bright_green().bold(),
            sample.recipe.name
        );
        println!("  Calories: {}", payload["nutrition"]["summary"]["calories"]);
        println!("  Allergens: {}", payload["allergens"]);
        println!("  May contain: {}", payload["may_contain_allergens"]);
        println!(
            "  Nutrients ({}): {}",
            sample.profile.per_serving.len(),
            nutrient_names.join(", ")
        );
        println!("  Status: {}", payload["status"]);
    }

    if dry_run {
        println!("\n{}", "DRY RUN - not updating the store".bright_yellow().bold());
    }
}

/// Generate human-readable report
fn print_human_report(stats: &CommandStats, update: Option<&UpdateSummary>) {
    println!("\n{}", "Enrichment Summary".bright_green().bold());
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_secs_f64()
    );

    match update {
        Some(summary) => {
            println!(
                "  {} {}",
                "Updated:".bright_cyan(),
                summary.updated.to_string().bright_white().bold()
            );
            if summary.failed > 0 {
                println!(
                    "  {} {}",
                    "Errors:".bright_red(),
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

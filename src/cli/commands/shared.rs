//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used by the
//! import and enrich commands.

use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of a command run for reporting and exit status
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandStats {
    /// Records found in the workbook (extracted recipes or nutrient profiles)
    pub records_found: usize,
    /// Records the store accepted
    pub records_written: usize,
    /// Records the store rejected
    pub records_failed: usize,
    /// No writes were attempted (dry run or declined confirmation)
    pub writes_skipped: bool,
    /// Total processing time
    #[serde(with = "duration_secs")]
    pub processing_time: std::time::Duration,
}

mod duration_secs {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        duration: &std::time::Duration,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}

/// Set up structured logging for any command
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recipe_importer={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let config = Config::load(args.config_file.as_deref())?;
    let config = apply_cli_overrides(config, args);

    config.validate()?;
    Ok(config)
}

/// Apply shared CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: Config, args: &CommonArgs) -> Config {
    if let Some(url) = &args.store_url {
        config = config.with_store_url(url.clone());
    }
    if let Some(owner) = &args.owner {
        config = config.with_owner_email(owner.clone());
    }
    config
}

/// Ask before writing unless `--yes` was given
pub fn confirm_writes(args: &CommonArgs, message: &str) -> Result<bool> {
    if args.yes {
        return Ok(true);
    }
    crate::cli::input::prompt_confirmation(message, false)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .map_err(|e| Error::configuration(format!("Invalid progress bar template: {}", e)))?
        .progress_chars("#>-");

    let pb = ProgressBar::new(total);
    pb.set_style(style);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a serialisable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialise report", e))?;
    println!("{}", text);
    Ok(())
}

//! Batched record creation and sequential patching
//!
//! Failures never abort a run. A rejected batch is retried one record at a
//! time; each record or patch that still fails is reported in the summary
//! with the store's status and message.

use std::time::Duration;

use indicatif::ProgressBar;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::RecordStore;
use crate::Error;

/// A record or update the store rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFailure {
    /// Recipe name, or `"<unnamed>"` when the payload has none
    pub name: String,
    pub status: Option<u16>,
    pub message: String,
}

impl ItemFailure {
    fn from_error(name: impl Into<String>, error: &Error) -> Self {
        let (status, message) = error.store_status();
        Self {
            name: name.into(),
            status,
            message,
        }
    }
}

/// Outcome of [`upload_records`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadSummary {
    pub inserted: usize,
    pub failed: usize,
    /// Batches that had to be retried record by record
    pub retried_batches: usize,
    pub failures: Vec<ItemFailure>,
}

impl UploadSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.failed
    }

    pub fn summary(&self) -> String {
        format!(
            "Upload Summary: {} inserted, {} failed ({} batches retried individually)",
            self.inserted, self.failed, self.retried_batches
        )
    }
}

/// A patch to send for one stored recipe
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub recipe_id: String,
    pub recipe_name: String,
    pub payload: Value,
}

/// Outcome of [`apply_updates`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSummary {
    pub updated: usize,
    pub failed: usize,
    pub failures: Vec<ItemFailure>,
}

impl UpdateSummary {
    pub fn summary(&self) -> String {
        format!(
            "Update Summary: {} updated, {} failed",
            self.updated, self.failed
        )
    }
}

fn payload_name(payload: &Value) -> String {
    payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_string()
}

/// Create `payloads` in batches of `batch_size`, pausing `batch_delay` between batches
///
/// # Arguments
///
/// * `store` - Destination record store
/// * `payloads` - Create payloads in upload order
/// * `batch_size` - Records per create request (at least 1)
/// * `batch_delay` - Pause between consecutive batches
/// * `progress_bar` - Optional progress bar advanced per record
pub async fn upload_records(
    store: &dyn RecordStore,
    payloads: &[Value],
    batch_size: usize,
    batch_delay: Duration,
    progress_bar: Option<&ProgressBar>,
) -> UploadSummary {
    let mut summary = UploadSummary::default();
    let batch_size = batch_size.max(1);
    let batch_count = payloads.len().div_ceil(batch_size);

    for (index, batch) in payloads.chunks(batch_size).enumerate() {
        if index > 0 && !batch_delay.is_zero() {
            tokio::time::sleep(batch_delay).await;
        }

        match store.create_batch(batch).await {
            Ok(()) => {
                summary.inserted += batch.len();
                info!(
                    "Batch {}/{}: inserted {} records (total: {}/{})",
                    index + 1,
                    batch_count,
                    batch.len(),
                    summary.inserted,
                    payloads.len()
                );
            }
            Err(e) => {
                warn!(
                    "Batch {}/{} failed, retrying record by record: {}",
                    index + 1,
                    batch_count,
                    e
                );
                summary.retried_batches += 1;
                retry_individually(store, batch, &mut summary).await;
            }
        }

        if let Some(pb) = progress_bar {
            pb.inc(batch.len() as u64);
            pb.set_message(format!("{} inserted, {} failed", summary.inserted, summary.failed));
        }
    }

    info!("{}", summary.summary());
    summary
}

async fn retry_individually(store: &dyn RecordStore, batch: &[Value], summary: &mut UploadSummary) {
    for payload in batch {
        match store.create_one(payload).await {
            Ok(()) => {
                summary.inserted += 1;
            }
            Err(e) => {
                let failure = ItemFailure::from_error(payload_name(payload), &e);
                warn!("Recipe '{}' rejected: {}", failure.name, failure.message);
                summary.failed += 1;
                summary.failures.push(failure);
            }
        }
    }
}

/// Send each update in order, continuing past failures
///
/// Every `progress_interval` updates the progress is logged and the loop
/// pauses for `pause`.
pub async fn apply_updates(
    store: &dyn RecordStore,
    updates: &[PendingUpdate],
    progress_interval: usize,
    pause: Duration,
    progress_bar: Option<&ProgressBar>,
) -> UpdateSummary {
    let mut summary = UpdateSummary::default();
    let progress_interval = progress_interval.max(1);

    for (index, update) in updates.iter().enumerate() {
        match store.patch(&update.recipe_id, &update.payload).await {
            Ok(()) => {
                summary.updated += 1;
                debug!("Updated '{}' ({})", update.recipe_name, update.recipe_id);
            }
            Err(e) => {
                let failure = ItemFailure::from_error(update.recipe_name.clone(), &e);
                warn!(
                    "Failed to update '{}': {:?} {}",
                    failure.name, failure.status, failure.message
                );
                summary.failed += 1;
                summary.failures.push(failure);
            }
        }

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if (index + 1) % progress_interval == 0 {
            info!("Progress: {}/{} updated", index + 1, updates.len());
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
    }

    info!("{}", summary.summary());
    summary
}

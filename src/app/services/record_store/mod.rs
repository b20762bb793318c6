//! Record store access for recipe import and enrichment
//!
//! The store is a REST table of recipes. All operations go through the
//! [`RecordStore`] trait so that upload and update orchestration can run
//! against an in-memory store in tests.
//!
//! ## Components
//!
//! - [`rest`] - PostgREST-style HTTP implementation
//! - [`payload`] - Create payloads for extracted records
//! - [`uploader`] - Batched creation with per-item fallback, sequential patching

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::app::models::StoredRecipe;

pub mod payload;
pub mod rest;
pub mod uploader;

#[cfg(test)]
pub mod tests;

pub use payload::recipe_payload;
pub use rest::RestRecordStore;
pub use uploader::{
    ItemFailure, PendingUpdate, UpdateSummary, UploadSummary, apply_updates, upload_records,
};

/// Persistence operations used by the importer
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create several records in one request
    async fn create_batch(&self, records: &[Value]) -> Result<()>;

    /// Create a single record
    async fn create_one(&self, record: &Value) -> Result<()>;

    /// List recipes owned by `owner_email`
    async fn fetch_owner_recipes(&self, owner_email: &str) -> Result<Vec<StoredRecipe>>;

    /// Apply a partial update to the recipe with `id`
    async fn patch(&self, id: &str, update: &Value) -> Result<()>;
}

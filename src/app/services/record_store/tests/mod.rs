//! In-memory record store and fixtures for record store tests

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Mutex;

use super::RecordStore;
use crate::app::models::StoredRecipe;
use crate::{Error, Result};


/// Record store double that rejects configured names
#[derive(Default)]
pub struct MockStore {
    /// Names rejected by both batch and single creation
    pub rejected_names: HashSet<String>,
    /// Ids rejected by patch
    pub rejected_ids: HashSet<String>,
    pub recipes: Vec<StoredRecipe>,
    pub created: Mutex<Vec<String>>,
    pub batch_calls: Mutex<usize>,
    pub single_calls: Mutex<usize>,
    pub patched: Mutex<Vec<(String, Value)>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(names: &[&str]) -> Self {
        Self {
            rejected_names: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    fn name_of(record: &Value) -> String {
        record["name"].as_str().unwrap_or_default().to_string()
    }

    fn check(&self, record: &Value) -> Result<()> {
        let name = Self::name_of(record);
        if self.rejected_names.contains(&name) {
            Err(Error::store(409, format!("duplicate key for {}", name)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn create_batch(&self, records: &[Value]) -> Result<()> {
        *self.batch_calls.lock().unwrap() += 1;
        for record in records {
            self.check(record)?;
        }
        let mut created = self.created.lock().unwrap();
        created.extend(records.iter().map(Self::name_of));
        Ok(())
    }

    async fn create_one(&self, record: &Value) -> Result<()> {
        *self.single_calls.lock().unwrap() += 1;
        self.check(record)?;
        self.created.lock().unwrap().push(Self::name_of(record));
        Ok(())
    }

    async fn fetch_owner_recipes(&self, _owner_email: &str) -> Result<Vec<StoredRecipe>> {
        Ok(self.recipes.clone())
    }

    async fn patch(&self, id: &str, update: &Value) -> Result<()> {
        if self.rejected_ids.contains(id) {
            return Err(Error::store(400, "invalid input syntax"));
        }
        self.patched
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));
        Ok(())
    }
}

pub fn named_payloads(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| json!({ "name": format!("Recipe {}", i) }))
        .collect()
}

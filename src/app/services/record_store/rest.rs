//! HTTP implementation of the record store

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use super::RecordStore;
use crate::app::models::StoredRecipe;
use crate::config::StoreConfig;
use crate::constants::STORE_FETCH_LIMIT;
use crate::{Error, Result};

/// Columns requested when listing recipes
const RECIPE_LISTING_COLUMNS: &str = "id,name,category,nutrition,serving,status";

/// Record store speaking the PostgREST dialect under `{base_url}/rest/v1`
#[derive(Debug, Clone)]
pub struct RestRecordStore {
    client: Client,
    table_url: String,
}

impl RestRecordStore {
    /// Create a store client with the service key attached to every request
    pub fn new(base_url: &str, service_key: &str, table: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(service_key)?);
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", service_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("Prefer", HeaderValue::from_static("return=minimal"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
        })
    }

    /// Create a store from validated configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::configuration("Record store URL is not configured"))?;
        let service_key = config
            .service_key
            .as_deref()
            .ok_or_else(|| Error::configuration("Record store service key is not configured"))?;

        Self::new(base_url, service_key, &config.table)
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!("Record store returned {}: {}", status, body);
            Err(Error::store(status.as_u16(), body))
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::configuration(format!("Invalid header value: {}", e)))
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn create_batch(&self, records: &[Value]) -> Result<()> {
        self.send(self.client.post(&self.table_url).json(records))
            .await
            .map(|_| ())
    }

    async fn create_one(&self, record: &Value) -> Result<()> {
        self.send(self.client.post(&self.table_url).json(record))
            .await
            .map(|_| ())
    }

    async fn fetch_owner_recipes(&self, owner_email: &str) -> Result<Vec<StoredRecipe>> {
        let owner_filter = format!("eq.{}", owner_email);
        let limit = STORE_FETCH_LIMIT.to_string();
        let request = self.client.get(&self.table_url).query(&[
            ("select", RECIPE_LISTING_COLUMNS),
            ("owner_email", owner_filter.as_str()),
            ("limit", limit.as_str()),
        ]);

        let response = self.send(request).await?;
        let recipes: Vec<StoredRecipe> = response
            .json()
            .await
            .map_err(|e| Error::http("Failed to decode recipe listing", e))?;

        debug!("Fetched {} recipes for {}", recipes.len(), owner_email);
        Ok(recipes)
    }

    async fn patch(&self, id: &str, update: &Value) -> Result<()> {
        let id_filter = format!("eq.{}", id);
        let request = self
            .client
            .patch(&self.table_url)
            .query(&[("id", id_filter.as_str())])
            .json(update);

        self.send(request).await.map(|_| ())
    }
}

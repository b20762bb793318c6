//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a TOML file, then the
//! environment (including a `.env` file), then command line overrides applied
//! by the CLI through the `with_*` builders.

use crate::constants::{
    DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE, DEFAULT_NUTRIENT_SHEET, DEFAULT_RECIPE_SHEET,
    DEFAULT_SENTINEL_LABEL, DEFAULT_STORE_TABLE, DEFAULT_UPDATE_PAUSE_MS,
    DEFAULT_UPDATE_PROGRESS_INTERVAL, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Directory name under the user configuration directory
const CONFIG_DIR_NAME: &str = "recipe-importer";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Record store connection and request pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the store, without the `/rest/v1` suffix
    pub base_url: Option<String>,

    /// Service key sent as `apikey` and bearer token
    pub service_key: Option<String>,

    /// Table holding recipes
    pub table: String,

    /// Records per create request
    pub batch_size: usize,

    /// Pause between create batches in milliseconds
    pub batch_delay_ms: u64,

    /// Log progress every N patch requests
    pub update_progress_interval: usize,

    /// Pause after each progress interval of patch requests in milliseconds
    pub update_pause_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            service_key: None,
            table: DEFAULT_STORE_TABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            update_progress_interval: DEFAULT_UPDATE_PROGRESS_INTERVAL,
            update_pause_ms: DEFAULT_UPDATE_PAUSE_MS,
        }
    }
}

impl StoreConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn update_pause(&self) -> Duration {
        Duration::from_millis(self.update_pause_ms)
    }
}

/// Worksheet names and the marker label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub recipe_sheet: String,
    pub nutrient_sheet: String,
    pub sentinel_label: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            recipe_sheet: DEFAULT_RECIPE_SHEET.to_string(),
            nutrient_sheet: DEFAULT_NUTRIENT_SHEET.to_string(),
            sentinel_label: DEFAULT_SENTINEL_LABEL.to_string(),
        }
    }
}

/// Ownership of imported records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub owner_email: Option<String>,
}

/// Complete importer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub extraction: ExtractionConfig,
    pub import: ImportConfig,
}

impl Config {
    /// Default configuration file location (`~/.config/recipe-importer/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| Error::configuration(format!("Invalid configuration file: {}", e)))
    }

    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&text)
    }

    /// Load defaults, the configuration file and the environment
    ///
    /// An explicit `path` must exist. Without one the default location is used
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(default_path) => {
                    debug!("Loading configuration from {}", default_path.display());
                    Self::from_file(&default_path)?
                }
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", env_file.display());
        }

        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Overlay values from an environment lookup
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(env_vars::STORE_URL) {
            self.store.base_url = Some(url);
        }
        if let Some(key) = lookup(env_vars::STORE_KEY) {
            self.store.service_key = Some(key);
        }
        if let Some(owner) = lookup(env_vars::OWNER_EMAIL) {
            self.import.owner_email = Some(owner);
        }
        self
    }

    /// Set the record store base URL
    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store.base_url = Some(url.into());
        self
    }

    /// Set the owner of imported records
    pub fn with_owner_email(mut self, owner: impl Into<String>) -> Self {
        self.import.owner_email = Some(owner.into());
        self
    }

    /// Set records per create request
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.store.batch_size = batch_size;
        self
    }

    /// Set the recipe worksheet name
    pub fn with_recipe_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.extraction.recipe_sheet = sheet.into();
        self
    }

    /// Set the nutrient worksheet name
    pub fn with_nutrient_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.extraction.nutrient_sheet = sheet.into();
        self
    }

    /// Set the marker label
    pub fn with_sentinel_label(mut self, label: impl Into<String>) -> Self {
        self.extraction.sentinel_label = label.into();
        self
    }

    /// Check settings needed for extraction
    pub fn validate(&self) -> Result<()> {
        if self.store.batch_size == 0 {
            return Err(Error::configuration("Batch size must be at least 1"));
        }
        if self.extraction.recipe_sheet.trim().is_empty() {
            return Err(Error::configuration("Recipe sheet name cannot be empty"));
        }
        if self.extraction.nutrient_sheet.trim().is_empty() {
            return Err(Error::configuration("Nutrient sheet name cannot be empty"));
        }
        if self.extraction.sentinel_label.trim().is_empty() {
            return Err(Error::configuration("Sentinel label cannot be empty"));
        }
        Ok(())
    }

    /// Check settings needed to talk to the record store
    pub fn validate_store(&self) -> Result<()> {
        self.validate()?;

        match self.store.base_url.as_deref() {
            None => {
                return Err(Error::configuration(format!(
                    "Record store URL is not set (use --store-url or {})",
                    env_vars::STORE_URL
                )));
            }
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                return Err(Error::configuration(format!(
                    "Record store URL must start with http:// or https://: {}",
                    url
                )));
            }
            Some(_) => {}
        }

        if self.store.service_key.is_none() {
            return Err(Error::configuration(format!(
                "Record store service key is not set ({})",
                env_vars::STORE_KEY
            )));
        }

        self.owner_email().map(|_| ())
    }

    /// Owner email, required for import and enrichment
    pub fn owner_email(&self) -> Result<&str> {
        self.import.owner_email.as_deref().ok_or_else(|| {
            Error::configuration(format!(
                "Owner email is not set (use --owner or {})",
                env_vars::OWNER_EMAIL
            ))
        })
    }
}

//! Recipe Importer Library
//!
//! A Rust library for extracting recipes from loosely structured Excel
//! workbooks and loading them into a REST record store.
//!
//! This library provides tools for:
//! - Loading worksheets into an absolute, row/column addressed cell grid
//! - Reconstructing recipes and their ingredient lists from visually grouped rows
//! - Parsing nutrient workbooks and matching them to stored recipes
//! - Building create/patch payloads for the record store
//! - Uploading in batches with per-item fallback and failure reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod enrichment;
        pub mod id_generator;
        pub mod nutrient_sheet;
        pub mod recipe_extractor;
        pub mod record_store;
        pub mod workbook;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{LineItem, Record, RecordMetadata, ServingInfo};
pub use config::Config;

/// Result type alias for the recipe importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for workbook loading, extraction support and record store access
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in file '{file}': {message}")]
    Workbook { file: String, message: String },

    /// Requested worksheet is not present in the workbook
    #[error("Sheet '{sheet}' not found in '{file}' (available: {available})")]
    SheetNotFound {
        file: String,
        sheet: String,
        available: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Record store rejected a request
    #[error("Record store error ({status}): {message}")]
    Store { status: u16, message: String },

    /// HTTP transport failure
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error
    pub fn workbook(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a sheet not found error
    pub fn sheet_not_found(
        file: impl Into<String>,
        sheet: impl Into<String>,
        available: &[String],
    ) -> Self {
        Self::SheetNotFound {
            file: file.into(),
            sheet: sheet.into(),
            available: available.join(", "),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a record store error from a response status and body
    pub fn store(status: u16, message: impl Into<String>) -> Self {
        Self::Store {
            status,
            message: message.into(),
        }
    }

    /// Create an HTTP transport error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Status code and message to report for a failed store operation
    pub fn store_status(&self) -> (Option<u16>, String) {
        match self {
            Self::Store { status, message } => (Some(*status), message.clone()),
            Self::Http { source, .. } => (source.status().map(|s| s.as_u16()), self.to_string()),
            other => (None, other.to_string()),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(error: calamine::XlsxError) -> Self {
        Self::Workbook {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "Request failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON conversion failed".to_string(),
            source: error,
        }
    }
}

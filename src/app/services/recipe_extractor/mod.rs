//! Spreadsheet record extractor for recipe sheets
//!
//! Recipe sheets have no explicit schema. Each recipe is a visual block: a
//! free-text name row (optionally preceded by a category row), a metadata block
//! opened by a "Recipe ID" marker, and a numbered ingredient table below an
//! "Ingredients" section label. This module reconstructs those blocks in a
//! single pass over an in-memory [`CellGrid`](crate::app::services::workbook::CellGrid).
//!
//! ## Architecture
//!
//! - [`predicates`] - Named row and value tests used by every scan
//! - [`markers`] - Forward scan for marker rows
//! - [`resolution`] - Backward scans for names and the sticky category
//! - [`metadata`] - Forward scan for metadata label/value pairs
//! - [`line_items`] - Ingredient table location and collection
//! - [`extractor`] - Orchestration and derived serving fields
//! - [`stats`] - Extraction counters and result structures
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::app::services::id_generator::SequentialIdGenerator;
//! use recipe_importer::app::services::recipe_extractor::RecipeExtractor;
//! use recipe_importer::app::services::workbook::CellGrid;
//!
//! let grid = CellGrid::default();
//! let extractor = RecipeExtractor::default();
//! let result = extractor.extract(&grid, &mut SequentialIdGenerator::new("recipe"));
//!
//! assert!(result.records.is_empty());
//! assert_eq!(result.stats.markers_found, 0);
//! ```

pub mod extractor;
pub mod line_items;
pub mod markers;
pub mod metadata;
pub mod predicates;
pub mod resolution;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::RecipeExtractor;
pub use line_items::{LineItemScan, ScanTermination};
pub use resolution::CategoryContext;
pub use stats::{ExtractionResult, ExtractionStats};

//! Recipe extraction orchestration
//!
//! Runs the marker scan once, then resolves each marker in order while
//! threading the sticky category through the loop. Extraction never fails as a
//! whole; markers that cannot be turned into a record are counted and skipped.

use tracing::{debug, info, warn};

use super::line_items::{collect_line_items, find_ingredients_start};
use super::markers::find_markers;
use super::metadata::extract_metadata;
use super::resolution::{CategoryContext, resolve_category, resolve_name};
use super::stats::{ExtractionResult, ExtractionStats};
use crate::app::models::{Record, ServingInfo};
use crate::app::services::id_generator::IdGenerator;
use crate::app::services::workbook::CellGrid;
use crate::constants::DEFAULT_SENTINEL_LABEL;

/// Spreadsheet record extractor for recipe sheets
///
/// # Example
///
/// ```rust
/// use recipe_importer::app::services::id_generator::SequentialIdGenerator;
/// use recipe_importer::app::services::recipe_extractor::RecipeExtractor;
/// use recipe_importer::app::services::workbook::{CellGrid, CellValue};
///
/// let t = CellValue::text;
/// let grid = CellGrid::from_rows(vec![
///     vec![t("Soups")],
///     vec![t("Lentil Soup")],
///     vec![CellValue::Empty, t("Recipe ID"), t("R-1")],
///     vec![t("Ingredients")],
///     vec![CellValue::Number(1.0), t("ING-1"), t("Lentils"), t("Ingredient"),
///          CellValue::Empty, CellValue::Number(200.0)],
/// ]);
///
/// let result = RecipeExtractor::default()
///     .extract(&grid, &mut SequentialIdGenerator::new("recipe"));
///
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0].name, "Lentil Soup");
/// assert_eq!(result.records[0].category.as_deref(), Some("Soups"));
/// ```
#[derive(Debug, Clone)]
pub struct RecipeExtractor {
    sentinel: String,
}

impl Default for RecipeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL_LABEL)
    }
}

impl RecipeExtractor {
    /// Create an extractor keyed on the given marker label
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Extract all recipes from the grid
    pub fn extract(&self, grid: &CellGrid, ids: &mut dyn IdGenerator) -> ExtractionResult {
        let mut stats = ExtractionStats::new();
        let markers = find_markers(grid, &self.sentinel);
        stats.markers_found = markers.len();
        info!("Found {} '{}' markers", markers.len(), self.sentinel);

        let mut records = Vec::with_capacity(markers.len());
        let mut context = CategoryContext::new();

        for (index, &marker_row) in markers.iter().enumerate() {
            let previous_marker = index.checked_sub(1).map(|i| markers[i]);

            let (record, next_context) =
                self.extract_one(grid, marker_row, previous_marker, context, ids, &mut stats);
            context = next_context;

            if let Some(record) = record {
                records.push(record);
            }
        }

        stats.records_extracted = records.len();
        info!("{}", stats.summary());

        ExtractionResult::new(records, stats)
    }

    /// Build the record for one marker and return the category context for the next
    fn extract_one(
        &self,
        grid: &CellGrid,
        marker_row: usize,
        previous_marker: Option<usize>,
        context: CategoryContext,
        ids: &mut dyn IdGenerator,
        stats: &mut ExtractionStats,
    ) -> (Option<Record>, CategoryContext) {
        let Some((name_row, name)) = resolve_name(grid, marker_row) else {
            debug!("No name found above marker row {}", marker_row);
            stats.unnamed_markers += 1;
            stats.add_message(format!("Marker at row {}: no recipe name", marker_row + 1));
            return (None, context);
        };

        let context = resolve_category(grid, name_row, previous_marker, context);
        let metadata = extract_metadata(grid, marker_row);

        let Some(start_row) = find_ingredients_start(grid, marker_row) else {
            warn!(
                "Recipe '{}' at row {} has no ingredient section, skipping",
                name, marker_row
            );
            stats.missing_ingredient_sections += 1;
            stats.add_message(format!(
                "Recipe '{}' (row {}): no ingredient section",
                name,
                marker_row + 1
            ));
            return (None, context);
        };

        let scan = collect_line_items(grid, start_row, ids);
        if scan.is_malformed() {
            stats.malformed_line_item_rows += 1;
            stats.add_message(format!(
                "Recipe '{}' (row {}): ingredient table truncated after {} items",
                name,
                marker_row + 1,
                scan.items.len()
            ));
        }

        let serving = ServingInfo::derive(&metadata, &scan.items);
        let record = Record {
            id: ids.next_id(),
            name,
            category: context.current().map(str::to_string),
            metadata,
            line_items: scan.items,
            serving,
            marker_row,
        };

        debug!(
            "Extracted '{}' [{}] with {} line items",
            record.name,
            record.category_or_empty(),
            record.line_item_count()
        );

        (Some(record), context)
    }
}

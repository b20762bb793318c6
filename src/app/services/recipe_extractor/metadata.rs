//! Metadata block extraction below marker rows
//!
//! Label cells are matched by substring. Values that are missing or do not
//! parse are left absent so that one bad cell never hides the rest of the block.

use tracing::debug;

use super::predicates::is_ingredients_label;
use crate::app::models::RecordMetadata;
use crate::app::services::workbook::CellGrid;
use crate::constants::{METADATA_LOOKAHEAD_ROWS, columns, labels};

/// Scan the metadata rows starting at the marker row
///
/// The scan covers [`METADATA_LOOKAHEAD_ROWS`] rows and stops after the row
/// carrying the ingredient section label.
pub fn extract_metadata(grid: &CellGrid, marker_row: usize) -> RecordMetadata {
    let mut metadata = RecordMetadata::default();
    let end = (marker_row + METADATA_LOOKAHEAD_ROWS).min(grid.row_count());

    for row in marker_row..end {
        read_primary_pair(grid, row, &mut metadata);
        read_secondary_pairs(grid, row, &mut metadata);

        if is_ingredients_label(grid, row) {
            break;
        }
    }

    debug!("Metadata from marker row {}: {:?}", marker_row, metadata);
    metadata
}

/// Label in the data column, value in the value column
fn read_primary_pair(grid: &CellGrid, row: usize, metadata: &mut RecordMetadata) {
    let Some(label) = grid.text(row, columns::DATA) else {
        return;
    };

    if label.contains(labels::RECIPE_ID) {
        metadata.source_recipe_id = grid.text(row, columns::VALUE);
    } else if label.contains(labels::TOTAL_YIELD) {
        metadata.total_yield = grid.number(row, columns::VALUE);
    } else if label.contains(labels::DESCRIPTION) {
        metadata.description = Some(grid.text(row, columns::VALUE).unwrap_or_default());
    } else if label.contains(labels::PREPARATION_TIME) {
        metadata.preparation_time_minutes = grid
            .number(row, columns::VALUE)
            .filter(|minutes| minutes.is_finite())
            .map(|minutes| minutes.trunc() as i64);
    }
}

/// Labels in the secondary columns, each value one column to the right
fn read_secondary_pairs(grid: &CellGrid, row: usize, metadata: &mut RecordMetadata) {
    for &col in columns::SECONDARY_LABELS {
        let Some(label) = grid.text(row, col) else {
            continue;
        };

        if label.contains(labels::CALORIES) {
            if let Some(calories) = grid.number(row, col + 1) {
                metadata.total_calories = Some(calories);
            }
        } else if label.contains(labels::PER_SERVING_WEIGHT) {
            if let Some(weight) = grid.number(row, col + 1) {
                metadata.per_serving_weight = Some(weight);
            }
        }
    }
}

//! Row parsing for the nutrient sheet

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::table::NutrientTable;
use crate::app::models::{NutrientProfile, NutrientValue, round_to};
use crate::app::services::workbook::CellGrid;
use crate::constants::{DEFAULT_SERVING_SIZE_GRAMS, NUTRIENT_COLUMNS, nutrient_columns};

/// Placeholder the sheet uses for "none"
const NONE_PLACEHOLDER: &str = "-";

/// Decimal places kept for nutrient quantities
const NUTRIENT_DECIMALS: i32 = 4;

/// Parse every data row of the nutrient sheet
pub fn parse_nutrient_sheet(grid: &CellGrid) -> NutrientTable {
    let mut table = NutrientTable::new();

    for row in nutrient_columns::FIRST_DATA_ROW..grid.row_count() {
        match parse_nutrient_row(grid, row) {
            Some(profile) => table.insert(profile),
            None => {
                debug!("Nutrient row {} has no name, skipping", row);
                table.skipped_rows += 1;
            }
        }
    }

    info!(
        "Parsed {} nutrient profiles ({} rows skipped)",
        table.len(),
        table.skipped_rows
    );
    table
}

/// Parse one nutrient row; `None` when the name column is empty
pub fn parse_nutrient_row(grid: &CellGrid, row: usize) -> Option<NutrientProfile> {
    let name = grid
        .text(row, nutrient_columns::NAME)
        .filter(|name| !name.is_empty())?;
    let category = grid.text(row, nutrient_columns::CATEGORY).unwrap_or_default();

    let sub_category = grid
        .text(row, nutrient_columns::SUB_CATEGORY)
        .filter(|value| !value.is_empty() && value != NONE_PLACEHOLDER);

    let mut per_serving = BTreeMap::new();
    for &(col, nutrient, unit) in NUTRIENT_COLUMNS {
        if let Some(quantity) = grid.number(row, col).filter(|q| q.is_finite()) {
            per_serving.insert(
                nutrient.to_string(),
                NutrientValue {
                    unit: unit.to_string(),
                    quantity: round_to(quantity, NUTRIENT_DECIMALS),
                },
            );
        }
    }

    Some(NutrientProfile {
        serving_weight: serving_weight(grid, row, &name),
        name,
        category,
        sub_category,
        status: grid.text(row, nutrient_columns::STATUS).unwrap_or_default(),
        per_serving,
        allergens: split_list(grid.text(row, nutrient_columns::ALLERGENS).as_deref()),
        may_contain_allergens: split_list(
            grid.text(row, nutrient_columns::MAY_CONTAIN).as_deref(),
        ),
        ingredient_names: split_list(grid.text(row, nutrient_columns::INGREDIENTS).as_deref()),
    })
}

/// Serving weight in grams, defaulting when empty, zero or unparseable
fn serving_weight(grid: &CellGrid, row: usize, name: &str) -> f64 {
    if !grid.has_value(row, nutrient_columns::SERVING_WEIGHT) {
        return DEFAULT_SERVING_SIZE_GRAMS;
    }

    match grid.number(row, nutrient_columns::SERVING_WEIGHT) {
        Some(weight) if weight != 0.0 => weight,
        Some(_) => DEFAULT_SERVING_SIZE_GRAMS,
        None => {
            warn!(
                "Serving weight for '{}' at row {} is not numeric, using {}g",
                name, row, DEFAULT_SERVING_SIZE_GRAMS
            );
            DEFAULT_SERVING_SIZE_GRAMS
        }
    }
}

/// Split a comma separated cell into trimmed, non-empty entries
///
/// An empty cell or a lone `-` yields an empty list.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value.map(str::trim) {
        None | Some("") | Some(NONE_PLACEHOLDER) => Vec::new(),
        Some(text) => text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

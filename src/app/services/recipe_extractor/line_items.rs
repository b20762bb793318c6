//! Ingredient table location and line item collection

use tracing::{debug, warn};

use super::predicates::{
    is_blank_row, is_ingredients_label, is_ordinal_header, parse_ordinal,
};
use crate::app::models::LineItem;
use crate::app::services::id_generator::IdGenerator;
use crate::app::services::workbook::CellGrid;
use crate::constants::{
    DEFAULT_INGREDIENT_SOURCE, DEFAULT_YIELD_PERCENT, ENTITY_INGREDIENT_PREFIX,
    INGREDIENTS_LOOKAHEAD_ROWS, columns,
};

/// Why line item collection stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTermination {
    /// Label column held something other than an ordinal
    NonOrdinal { row: usize },
    /// Label, data and value columns were all empty
    BlankRow { row: usize },
    /// Empty ordinal but data in the ingredient columns
    MalformedRow { row: usize },
    /// Ran off the bottom of the sheet
    EndOfSheet,
}

/// Line items collected for one record and where the scan stopped
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemScan {
    pub items: Vec<LineItem>,
    pub termination: ScanTermination,
}

impl LineItemScan {
    pub fn is_malformed(&self) -> bool {
        matches!(self.termination, ScanTermination::MalformedRow { .. })
    }
}

/// First ingredient row for the marker at `marker_row`
///
/// Looks for the section label within [`INGREDIENTS_LOOKAHEAD_ROWS`] rows of the
/// marker and skips an ordinal sub-header directly below it.
pub fn find_ingredients_start(grid: &CellGrid, marker_row: usize) -> Option<usize> {
    let end = (marker_row + INGREDIENTS_LOOKAHEAD_ROWS).min(grid.row_count());

    (marker_row..end)
        .find(|&row| is_ingredients_label(grid, row))
        .map(|label_row| {
            let next = label_row + 1;
            if is_ordinal_header(grid, next) {
                next + 1
            } else {
                next
            }
        })
}

/// Collect consecutive ordinal rows starting at `start_row`
pub fn collect_line_items(
    grid: &CellGrid,
    start_row: usize,
    ids: &mut dyn IdGenerator,
) -> LineItemScan {
    let mut items = Vec::new();

    for row in start_row..grid.row_count() {
        let label = grid.get(row, columns::LABEL);

        if label.is_empty() {
            let termination = if is_blank_row(grid, row) {
                ScanTermination::BlankRow { row }
            } else {
                warn!(
                    "Row {} has ingredient data but no ordinal, stopping after {} items",
                    row,
                    items.len()
                );
                ScanTermination::MalformedRow { row }
            };
            return LineItemScan { items, termination };
        }

        let Some(ordinal) = parse_ordinal(label) else {
            debug!("Ingredient table ends at row {} ({:?})", row, label);
            return LineItemScan {
                items,
                termination: ScanTermination::NonOrdinal { row },
            };
        };

        items.push(parse_line_item(grid, row, ordinal, ids));
    }

    LineItemScan {
        items,
        termination: ScanTermination::EndOfSheet,
    }
}

/// Build one line item from an ordinal row
pub fn parse_line_item(
    grid: &CellGrid,
    row: usize,
    ordinal: i64,
    ids: &mut dyn IdGenerator,
) -> LineItem {
    let quantity = grid.number(row, columns::QUANTITY);
    let yield_quantity = grid.number(row, columns::YIELD_QUANTITY);

    LineItem {
        ordinal,
        ingredient_id: grid.text(row, columns::INGREDIENT_ID).unwrap_or_default(),
        name: grid.text(row, columns::INGREDIENT_NAME).unwrap_or_default(),
        source: grid
            .text(row, columns::INGREDIENT_TYPE)
            .unwrap_or_else(|| DEFAULT_INGREDIENT_SOURCE.to_string()),
        sub_recipe_name: grid.text(row, columns::SUB_RECIPE),
        quantity,
        yield_percent: grid
            .number(row, columns::YIELD_PERCENT)
            .filter(|percent| *percent != 0.0)
            .unwrap_or(DEFAULT_YIELD_PERCENT),
        yield_quantity,
        cost: grid.number(row, columns::COST).unwrap_or(0.0),
        quantity_in_grams: LineItem::effective_quantity(yield_quantity, quantity),
        entity_ingredient_id: format!("{}{}", ENTITY_INGREDIENT_PREFIX, ids.next_id()),
    }
}

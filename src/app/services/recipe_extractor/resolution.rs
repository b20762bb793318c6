//! Name and category resolution above marker rows
//!
//! Both scans walk upwards through at most [`NAME_LOOKBEHIND_ROWS`] rows. The
//! category is sticky: it is carried in a [`CategoryContext`] that each marker
//! receives and hands on, updated only when a closer category row is found.

use tracing::debug;

use super::predicates::{is_candidate_label, is_gap_row, is_label_row, is_plain_number};
use crate::app::services::workbook::CellGrid;
use crate::constants::{NAME_LOOKBEHIND_ROWS, columns};

/// Category in effect for the next record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryContext {
    current: Option<String>,
}

impl CategoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current category, if any has been seen
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Replace the current category
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            current: Some(category.into()),
        }
    }
}

/// Rows `start - 1` down to `start - NAME_LOOKBEHIND_ROWS`, stopping at row 0
fn rows_above(start: usize) -> impl Iterator<Item = usize> {
    (start.saturating_sub(NAME_LOOKBEHIND_ROWS)..start).rev()
}

/// Find the recipe name for the marker at `marker_row`
///
/// Returns the row and text of the nearest label-only row above the marker
/// whose value is neither a known header nor date-like.
pub fn resolve_name(grid: &CellGrid, marker_row: usize) -> Option<(usize, String)> {
    rows_above(marker_row)
        .filter(|&row| is_label_row(grid, row))
        .find_map(|row| {
            grid.text(row, columns::LABEL)
                .filter(|value| is_candidate_label(value))
                .map(|value| (row, value))
        })
}

/// Resolve the category above a recipe name and return the updated context
///
/// Only the first non-gap row above the name is considered. It becomes the
/// category when it is a label-only candidate that is not a plain number and
/// sits below `previous_marker` (or when there is no previous marker). Any
/// other first row leaves the context unchanged.
pub fn resolve_category(
    grid: &CellGrid,
    name_row: usize,
    previous_marker: Option<usize>,
    context: CategoryContext,
) -> CategoryContext {
    for row in rows_above(name_row) {
        if is_gap_row(grid, row) {
            continue;
        }

        if !is_label_row(grid, row) {
            // part of the previous recipe block
            return context;
        }

        let Some(value) = grid.text(row, columns::LABEL) else {
            return context;
        };
        if !is_candidate_label(&value) || is_plain_number(&value) {
            return context;
        }

        return match previous_marker {
            Some(previous) if row <= previous => {
                debug!(
                    "Row {} above previous marker {}, keeping category {:?}",
                    row,
                    previous,
                    context.current()
                );
                context
            }
            _ => {
                debug!("Category '{}' resolved at row {}", value, row);
                context.with_category(value)
            }
        };
    }

    context
}

//! Marker row detection

use crate::app::services::workbook::CellGrid;
use crate::constants::columns;

/// Rows whose data column contains the sentinel label, in ascending order
pub fn find_markers(grid: &CellGrid, sentinel: &str) -> Vec<usize> {
    (0..grid.row_count())
        .filter(|&row| {
            grid.text(row, columns::DATA)
                .is_some_and(|text| text.contains(sentinel))
        })
        .collect()
}

//! Workbook opening and sheet conversion
//!
//! Any failure here is fatal for the run: nothing is extracted from a workbook
//! that cannot be read completely.

use calamine::{Data, ExcelDateTime, Range, Reader, Xlsx, XlsxError, open_workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use super::grid::{CellGrid, CellValue};
use crate::{Error, Result};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load one worksheet of an `.xlsx` workbook into a grid
pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<CellGrid> {
    info!("Loading sheet '{}' from {}", sheet_name, path.display());

    if !path.exists() {
        return Err(Error::workbook(
            path.display().to_string(),
            "file does not exist",
        ));
    }

    let mut workbook = open_xlsx(path)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet_name) {
        return Err(Error::sheet_not_found(
            path.display().to_string(),
            sheet_name,
            &available,
        ));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| Error::workbook(path.display().to_string(), e.to_string()))?;

    let grid = range_to_grid(&range);
    debug!(
        "Sheet '{}' loaded with {} rows",
        sheet_name,
        grid.row_count()
    );
    Ok(grid)
}

/// List the worksheet names of a workbook
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    Ok(open_xlsx(path)?.sheet_names())
}

fn open_xlsx(path: &Path) -> Result<Xlsx<BufReader<File>>> {
    open_workbook(path)
        .map_err(|e: XlsxError| Error::workbook(path.display().to_string(), e.to_string()))
}

/// Convert a calamine range into an absolute grid
///
/// calamine ranges start at the first used cell, so cell positions are shifted
/// by the range origin to keep sheet coordinates.
pub fn range_to_grid(range: &Range<Data>) -> CellGrid {
    let Some((start_row, start_col)) = range.start() else {
        return CellGrid::default();
    };
    let (height, width) = range.get_size();
    let start_row = start_row as usize;
    let start_col = start_col as usize;

    let mut rows = vec![vec![CellValue::Empty; start_col + width]; start_row + height];
    for (row, col, data) in range.cells() {
        rows[start_row + row][start_col + col] = convert_cell(data);
    }

    CellGrid::from_rows(rows)
}

/// Convert a calamine cell into a grid value
pub fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Text(format_datetime(dt)),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

/// Display text of a date/time cell
///
/// Dates render as `YYYY-MM-DD HH:MM:SS`; durations and out-of-range serials
/// keep the raw serial value.
pub fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.as_f64().to_string();
    }
    match dt.as_datetime() {
        Some(datetime) => datetime.format(DATETIME_FORMAT).to_string(),
        None => dt.as_f64().to_string(),
    }
}

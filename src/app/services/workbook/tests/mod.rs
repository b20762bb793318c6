//! Test utilities for workbook loading
//!
//! Workbooks are written with rust_xlsxwriter into temporary directories so the
//! loader is exercised against real `.xlsx` files.

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::CellValue;


/// Write `rows` to a sheet named `sheet_name` in a new workbook at `path`
pub fn write_workbook(path: &Path, sheet_name: &str, rows: &[Vec<CellValue>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(r, c, s).unwrap();
                }
                CellValue::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b).unwrap();
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Create a temporary workbook and return its directory guard and path
pub fn create_temp_workbook(sheet_name: &str, rows: &[Vec<CellValue>]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.xlsx");
    write_workbook(&path, sheet_name, rows);
    (dir, path)
}

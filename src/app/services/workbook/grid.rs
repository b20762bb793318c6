//! Typed cell values and the row/column addressed grid
//!
//! Rows and columns are 0-based and absolute: row 0 is the first sheet row even
//! when the used range of the sheet starts further down.

use serde::{Deserialize, Serialize};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A single worksheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// True for empty cells and zero-length text
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Display form of the cell; whole numbers have no fractional part
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Numeric value of a number cell or of text that parses as a float
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Read-only grid of cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGrid {
    rows: Vec<Vec<CellValue>>,
}

impl CellGrid {
    /// Build a grid from literal rows; rows may have different lengths
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Number of rows, including leading empty rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, col)`; out-of-range positions read as empty
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Whether the cell holds anything
    pub fn has_value(&self, row: usize, col: usize) -> bool {
        !self.get(row, col).is_empty()
    }

    /// Trimmed display text, `None` for empty cells
    pub fn text(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.get(row, col);
        if cell.is_empty() {
            None
        } else {
            Some(cell.display().trim().to_string())
        }
    }

    /// Numeric value of the cell, `None` when empty or unparseable
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).as_number()
    }
}

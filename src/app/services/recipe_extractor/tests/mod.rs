//! Test utilities and fixtures for recipe extraction
//!
//! Grids are built cell by cell with [`SheetBuilder`] using the same 0-based
//! coordinates the extractor works with.

use crate::app::services::workbook::{CellGrid, CellValue};
use crate::constants::columns;

mod extractor_tests;
mod line_item_tests;

/// Incremental grid builder
#[derive(Debug, Default)]
pub struct SheetBuilder {
    rows: Vec<Vec<CellValue>>,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, row: usize, col: usize, value: CellValue) -> Self {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value;
        self
    }

    pub fn text(self, row: usize, col: usize, value: &str) -> Self {
        self.cell(row, col, CellValue::text(value))
    }

    pub fn number(self, row: usize, col: usize, value: f64) -> Self {
        self.cell(row, col, CellValue::Number(value))
    }

    /// Label-only row (name, category or section label)
    pub fn label(self, row: usize, value: &str) -> Self {
        self.text(row, columns::LABEL, value)
    }

    /// Marker row with the default sentinel and a source id
    pub fn marker(self, row: usize, source_id: &str) -> Self {
        self.text(row, columns::DATA, "Recipe ID")
            .text(row, columns::VALUE, source_id)
    }

    /// Metadata pair in the data/value columns
    pub fn meta(self, row: usize, label: &str, value: CellValue) -> Self {
        self.text(row, columns::DATA, label)
            .cell(row, columns::VALUE, value)
    }

    /// Numbered ingredient row with a raw quantity
    pub fn ingredient(self, row: usize, ordinal: f64, name: &str, quantity: f64) -> Self {
        self.number(row, columns::LABEL, ordinal)
            .text(row, columns::INGREDIENT_ID, &format!("ING-{}", ordinal))
            .text(row, columns::INGREDIENT_NAME, name)
            .text(row, columns::INGREDIENT_TYPE, "Ingredient")
            .number(row, columns::QUANTITY, quantity)
    }

    pub fn build(self) -> CellGrid {
        CellGrid::from_rows(self.rows)
    }
}

/// Single recipe laid out as in the reference export:
/// category at row 5, name at row 8, marker at row 10, metadata rows 11-14,
/// section label at row 15 and three ingredients at rows 16-18
pub fn lentil_soup_grid() -> CellGrid {
    SheetBuilder::new()
        .label(0, "BEN'S FARMHOUSE")
        .label(1, "2026-02-10")
        .label(5, "Soups")
        .label(8, "Lentil Soup")
        .marker(10, "R-100")
        .meta(11, "Total Yield (g)", CellValue::Number(500.0))
        .meta(12, "Description", CellValue::text("Hearty soup"))
        .meta(13, "Preparation Time (min)", CellValue::Number(45.0))
        .text(12, 5, "Total Calories")
        .number(12, 6, 320.0)
        .text(14, 5, "Per Serving Weight")
        .number(14, 6, 250.0)
        .label(15, "Ingredients")
        .ingredient(16, 1.0, "Red Lentils", 200.0)
        .ingredient(17, 2.0, "Onion", 100.0)
        .ingredient(18, 3.0, "Vegetable Stock", 200.0)
        .build()
}

/// Two soups under one category followed by a salad under a new category
pub fn three_recipe_grid() -> CellGrid {
    SheetBuilder::new()
        .label(0, "Soups")
        .label(1, "Lentil Soup")
        .marker(2, "R-1")
        .meta(3, "Total Yield", CellValue::Number(500.0))
        .label(4, "Ingredients")
        .text(5, columns::LABEL, "S.No")
        .text(5, columns::DATA, "Ingredient ID")
        .text(5, columns::VALUE, "Ingredient")
        .ingredient(6, 1.0, "Lentils", 300.0)
        .ingredient(7, 2.0, "Water", 200.0)
        .label(9, "Tomato Soup")
        .marker(10, "R-2")
        .label(11, "Ingredients")
        .ingredient(12, 1.0, "Tomatoes", 400.0)
        .label(14, "Salads")
        .label(15, "Greek Salad")
        .marker(16, "R-3")
        .label(17, "Ingredients")
        .ingredient(18, 1.0, "Feta", 80.0)
        .ingredient(19, 2.0, "Cucumber", 120.0)
        .build()
}

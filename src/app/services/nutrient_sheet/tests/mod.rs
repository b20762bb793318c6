//! Test fixtures for nutrient sheet parsing

use crate::app::services::workbook::{CellGrid, CellValue};


/// One nutrient sheet row with labelling columns B..I filled in
pub struct NutrientRow {
    pub name: &'static str,
    pub category: &'static str,
    pub sub_category: &'static str,
    pub status: &'static str,
    pub serving_weight: CellValue,
    pub ingredients: &'static str,
    pub allergens: &'static str,
    pub may_contain: &'static str,
    /// (column, value) pairs for the nutrient block
    pub nutrients: Vec<(usize, CellValue)>,
}

impl NutrientRow {
    pub fn named(name: &'static str, category: &'static str) -> Self {
        Self {
            name,
            category,
            sub_category: "",
            status: "",
            serving_weight: CellValue::Number(250.0),
            ingredients: "",
            allergens: "",
            may_contain: "",
            nutrients: Vec::new(),
        }
    }

    fn to_cells(&self) -> Vec<CellValue> {
        let text = |value: &str| {
            if value.is_empty() {
                CellValue::Empty
            } else {
                CellValue::text(value)
            }
        };

        let mut cells = vec![CellValue::Empty; 48];
        cells[0] = CellValue::Number(1.0);
        cells[1] = text(self.name);
        cells[2] = text(self.category);
        cells[3] = text(self.sub_category);
        cells[4] = text(self.status);
        cells[5] = self.serving_weight.clone();
        cells[6] = text(self.ingredients);
        cells[7] = text(self.allergens);
        cells[8] = text(self.may_contain);
        for (col, value) in &self.nutrients {
            cells[*col] = value.clone();
        }
        cells
    }
}

/// Grid with a header row followed by the given data rows
pub fn nutrient_grid(rows: &[NutrientRow]) -> CellGrid {
    let header = vec![
        CellValue::text("#"),
        CellValue::text("Name"),
        CellValue::text("Category"),
    ];
    let mut grid_rows = vec![header];
    grid_rows.extend(rows.iter().map(NutrientRow::to_cells));
    CellGrid::from_rows(grid_rows)
}

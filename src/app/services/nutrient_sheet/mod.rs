//! Nutrient workbook parsing
//!
//! The nutrient export is a plain table: one header row, then one row per
//! recipe with labelling columns followed by per-serving nutrient amounts.
//! Parsing produces a [`NutrientTable`] that answers lookups by
//! `(name, category)` with a name-only fallback.

pub mod parser;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use parser::{parse_nutrient_row, parse_nutrient_sheet, split_list};
pub use table::NutrientTable;

//! Worksheet loading into an addressable cell grid
//!
//! The recipe and nutrient sheets are read once into a [`CellGrid`] and every
//! later stage works on that in-memory grid without touching the file again.
//!
//! - [`grid`] - Typed cell values and the absolute row/column grid
//! - [`loader`] - Workbook opening and sheet conversion via calamine

pub mod grid;
pub mod loader;

#[cfg(test)]
pub mod tests;

pub use grid::{CellGrid, CellValue};
pub use loader::{load_sheet, sheet_names};

//! Row and value predicates for the recipe sheet heuristics
//!
//! Every positional rule of the extractor is expressed through one of these
//! functions so it can be tested in isolation.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::services::workbook::{CellGrid, CellValue};
use crate::constants::{DATE_LIKE_MAX_LEN, columns, labels};

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").expect("year pattern is valid"));

/// A value in the label column and nothing in the adjacent data column
pub fn is_label_row(grid: &CellGrid, row: usize) -> bool {
    grid.has_value(row, columns::LABEL) && !grid.has_value(row, columns::DATA)
}

/// Neither the label column nor the data column holds a value
pub fn is_gap_row(grid: &CellGrid, row: usize) -> bool {
    !grid.has_value(row, columns::LABEL) && !grid.has_value(row, columns::DATA)
}

/// Label, data and value columns are all empty
pub fn is_blank_row(grid: &CellGrid, row: usize) -> bool {
    !grid.has_value(row, columns::LABEL)
        && !grid.has_value(row, columns::DATA)
        && !grid.has_value(row, columns::VALUE)
}

/// Known sheet headers that are never names or categories
pub fn is_denied_label(value: &str) -> bool {
    value.is_empty() || labels::NON_NAME_HEADERS.contains(&value)
}

/// Short values holding a four-digit year next to a date separator
pub fn is_date_like(value: &str) -> bool {
    YEAR_PATTERN.is_match(value)
        && (value.contains('-') || value.contains('/'))
        && value.chars().count() < DATE_LIKE_MAX_LEN
}

/// Label text usable as a recipe name or category
pub fn is_candidate_label(value: &str) -> bool {
    !is_denied_label(value) && !is_date_like(value)
}

/// Values that parse as a plain number, such as an ingredient ordinal
pub fn is_plain_number(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Integer ordinal of an ingredient row (`3`, `"3"`, `"3.0"`)
pub fn parse_ordinal(cell: &CellValue) -> Option<i64> {
    cell.as_number()
        .filter(|n| n.is_finite())
        .map(|n| n.trunc() as i64)
}

/// The label column holds exactly the ingredient section label
pub fn is_ingredients_label(grid: &CellGrid, row: usize) -> bool {
    grid.text(row, columns::LABEL).as_deref() == Some(labels::INGREDIENTS)
}

/// The label column holds the ordinal sub-header of the ingredient table
pub fn is_ordinal_header(grid: &CellGrid, row: usize) -> bool {
    grid.text(row, columns::LABEL)
        .is_some_and(|text| text.contains(labels::ORDINAL_HEADER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_date_like() {
        assert!(is_date_like("2026-02-10"));
        assert!(is_date_like("10/02/2026"));
        assert!(is_date_like("Printed 2026-02-10"));
        assert!(!is_date_like("Lentil Soup"));
        assert!(!is_date_like("2026 Specials"));
        assert!(!is_date_like("Salad - Greek"));
        assert!(!is_date_like("Report generated on 2026-02-10 at noon"));
    }

    #[test]
    fn test_is_denied_label() {
        assert!(is_denied_label("BEN'S FARMHOUSE"));
        assert!(is_denied_label("Ingredients"));
        assert!(is_denied_label("S.No"));
        assert!(is_denied_label(""));
        assert!(!is_denied_label("Soups"));
    }

    #[test]
    fn test_is_plain_number() {
        assert!(is_plain_number("3"));
        assert!(is_plain_number("3.5"));
        assert!(is_plain_number(" 12 "));
        assert!(!is_plain_number("3 eggs"));
        assert!(!is_plain_number("Soups"));
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal(&CellValue::Number(3.0)), Some(3));
        assert_eq!(parse_ordinal(&CellValue::text("4")), Some(4));
        assert_eq!(parse_ordinal(&CellValue::text("5.0")), Some(5));
        assert_eq!(parse_ordinal(&CellValue::text("Total")), None);
        assert_eq!(parse_ordinal(&CellValue::text("NaN")), None);
        assert_eq!(parse_ordinal(&CellValue::Empty), None);
    }
}

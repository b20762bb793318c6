//! Tests for ingredient table location and collection

use super::*;
use crate::app::services::id_generator::SequentialIdGenerator;
use crate::app::services::recipe_extractor::line_items::{
    collect_line_items, find_ingredients_start, parse_line_item,
};
use crate::app::models::{RecordMetadata, ServingInfo};
use crate::app::services::recipe_extractor::ScanTermination;

#[test]
fn test_ingredients_start_below_label() {
    let grid = SheetBuilder::new()
        .marker(0, "R-1")
        .label(3, "Ingredients")
        .ingredient(4, 1.0, "Salt", 1.0)
        .build();

    assert_eq!(find_ingredients_start(&grid, 0), Some(4));
}

#[test]
fn test_ingredients_start_skips_ordinal_header() {
    let grid = SheetBuilder::new()
        .marker(0, "R-1")
        .label(1, "Ingredients")
        .text(2, columns::LABEL, "S.No")
        .text(2, columns::DATA, "Ingredient ID")
        .ingredient(3, 1.0, "Salt", 1.0)
        .build();

    assert_eq!(find_ingredients_start(&grid, 0), Some(3));
}

#[test]
fn test_ingredients_label_outside_window() {
    let grid = SheetBuilder::new()
        .marker(0, "R-1")
        .label(12, "Ingredients")
        .build();

    assert_eq!(find_ingredients_start(&grid, 0), None);
}

#[test]
fn test_collection_stops_at_blank_row() {
    // 1, 2, 3, <empty>, 4
    let grid = SheetBuilder::new()
        .ingredient(0, 1.0, "A", 1.0)
        .ingredient(1, 2.0, "B", 1.0)
        .ingredient(2, 3.0, "C", 1.0)
        .ingredient(4, 4.0, "D", 1.0)
        .build();

    let scan = collect_line_items(&grid, 0, &mut SequentialIdGenerator::new("id"));

    let ordinals: Vec<i64> = scan.items.iter().map(|i| i.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(scan.termination, ScanTermination::BlankRow { row: 3 });
    assert!(!scan.is_malformed());
}

#[test]
fn test_collection_stops_at_non_ordinal() {
    let grid = SheetBuilder::new()
        .ingredient(0, 1.0, "A", 1.0)
        .text(1, columns::LABEL, "Total")
        .text(1, columns::DATA, "x")
        .build();

    let scan = collect_line_items(&grid, 0, &mut SequentialIdGenerator::new("id"));

    assert_eq!(scan.items.len(), 1);
    assert_eq!(scan.termination, ScanTermination::NonOrdinal { row: 1 });
}

#[test]
fn test_collection_stops_at_malformed_row() {
    let grid = SheetBuilder::new()
        .ingredient(0, 1.0, "A", 1.0)
        .text(1, columns::DATA, "ING-X")
        .ingredient(2, 2.0, "B", 1.0)
        .build();

    let scan = collect_line_items(&grid, 0, &mut SequentialIdGenerator::new("id"));

    assert_eq!(scan.items.len(), 1);
    assert_eq!(scan.termination, ScanTermination::MalformedRow { row: 1 });
    assert!(scan.is_malformed());
}

#[test]
fn test_collection_runs_to_end_of_sheet() {
    let grid = SheetBuilder::new()
        .ingredient(0, 1.0, "A", 1.0)
        .cell(1, columns::LABEL, CellValue::text("2"))
        .build();

    let scan = collect_line_items(&grid, 0, &mut SequentialIdGenerator::new("id"));

    assert_eq!(scan.items.len(), 2);
    assert_eq!(scan.items[1].ordinal, 2);
    assert_eq!(scan.termination, ScanTermination::EndOfSheet);
}

#[test]
fn test_parse_line_item_fields_and_defaults() {
    let grid = SheetBuilder::new()
        .number(0, columns::LABEL, 1.0)
        .text(0, columns::INGREDIENT_ID, " ING-7 ")
        .text(0, columns::INGREDIENT_NAME, "Butter")
        .text(0, columns::SUB_RECIPE, "Brown Butter")
        .number(0, columns::QUANTITY, 100.0)
        .number(0, columns::YIELD_QUANTITY, 85.0)
        .number(0, columns::COST, 2.5)
        .build();

    let item = parse_line_item(&grid, 0, 1, &mut SequentialIdGenerator::new("id"));

    assert_eq!(item.ingredient_id, "ING-7");
    assert_eq!(item.name, "Butter");
    assert_eq!(item.source, "Ingredient");
    assert_eq!(item.sub_recipe_name.as_deref(), Some("Brown Butter"));
    assert_eq!(item.quantity, Some(100.0));
    assert_eq!(item.yield_quantity, Some(85.0));
    assert_eq!(item.yield_percent, 100.0);
    assert_eq!(item.cost, 2.5);
    assert_eq!(item.quantity_in_grams, 85.0);
    assert_eq!(item.entity_ingredient_id, "imported_id_1");
}

#[test]
fn test_parse_line_item_unparseable_quantities() {
    let grid = SheetBuilder::new()
        .number(0, columns::LABEL, 1.0)
        .text(0, columns::INGREDIENT_TYPE, "Sub Recipe")
        .text(0, columns::QUANTITY, "a pinch")
        .text(0, columns::YIELD_PERCENT, "n/a")
        .text(0, columns::YIELD_QUANTITY, "-")
        .build();

    let item = parse_line_item(&grid, 0, 1, &mut SequentialIdGenerator::new("id"));

    assert_eq!(item.source, "Sub Recipe");
    assert_eq!(item.quantity, None);
    assert_eq!(item.yield_quantity, None);
    assert_eq!(item.yield_percent, 100.0);
    assert_eq!(item.cost, 0.0);
    assert_eq!(item.quantity_in_grams, 0.0);
    assert_eq!(item.name, "");
}

#[test]
fn test_unparseable_yield_quantity_falls_back_to_quantity() {
    let grid = SheetBuilder::new()
        .number(0, columns::LABEL, 1.0)
        .number(0, columns::QUANTITY, 40.0)
        .text(0, columns::YIELD_QUANTITY, "tbc")
        .number(0, columns::YIELD_PERCENT, 90.0)
        .build();

    let item = parse_line_item(&grid, 0, 1, &mut SequentialIdGenerator::new("id"));

    assert_eq!(item.quantity_in_grams, 40.0);
    assert_eq!(item.yield_percent, 90.0);
}

#[test]
fn test_zero_yield_quantity_falls_back_to_quantity() {
    let grid = SheetBuilder::new()
        .number(0, columns::LABEL, 1.0)
        .number(0, columns::QUANTITY, 200.0)
        .number(0, columns::YIELD_PERCENT, 100.0)
        .number(0, columns::YIELD_QUANTITY, 0.0)
        .build();

    let item = parse_line_item(&grid, 0, 1, &mut SequentialIdGenerator::new("id"));

    assert_eq!(item.yield_quantity, Some(0.0));
    assert_eq!(item.quantity_in_grams, 200.0);

    let serving = ServingInfo::derive(&RecordMetadata::default(), &[item]);
    assert_eq!(serving.total_yield_grams, 200.0);
}

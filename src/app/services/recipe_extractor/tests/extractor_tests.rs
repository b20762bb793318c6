//! Tests for end-to-end extraction over whole grids

use super::*;
use crate::app::services::id_generator::SequentialIdGenerator;
use crate::app::services::recipe_extractor::RecipeExtractor;

fn extract(grid: &CellGrid) -> crate::app::services::recipe_extractor::ExtractionResult {
    RecipeExtractor::default().extract(grid, &mut SequentialIdGenerator::new("recipe"))
}

#[test]
fn test_grid_without_markers_yields_nothing() {
    let grid = SheetBuilder::new()
        .label(0, "Soups")
        .label(1, "Lentil Soup")
        .label(2, "Ingredients")
        .ingredient(3, 1.0, "Lentils", 100.0)
        .build();

    let result = extract(&grid);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.markers_found, 0);
    assert_eq!(result.stats.records_extracted, 0);
}

#[test]
fn test_empty_grid_yields_nothing() {
    let result = extract(&CellGrid::default());
    assert!(result.records.is_empty());
}

#[test]
fn test_lentil_soup_scenario() {
    let result = extract(&lentil_soup_grid());

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.name, "Lentil Soup");
    assert_eq!(record.category.as_deref(), Some("Soups"));
    assert_eq!(record.marker_row, 10);
    assert_eq!(record.metadata.source_recipe_id.as_deref(), Some("R-100"));
    assert_eq!(record.metadata.total_yield, Some(500.0));
    assert_eq!(record.metadata.description.as_deref(), Some("Hearty soup"));
    assert_eq!(record.metadata.preparation_time_minutes, Some(45));
    assert_eq!(record.metadata.total_calories, Some(320.0));
    assert_eq!(record.metadata.per_serving_weight, Some(250.0));
    assert_eq!(record.serving.total_yield_grams, 500.0);
    assert_eq!(record.serving.serving_size_grams, 250.0);
    assert_eq!(record.serving.scale_factor, 2.0);
    assert_eq!(record.line_items.len(), 3);
    assert_eq!(record.line_items[0].name, "Red Lentils");
    assert_eq!(record.line_items[2].name, "Vegetable Stock");
}

#[test]
fn test_sticky_category_across_records() {
    let result = extract(&three_recipe_grid());

    let summary: Vec<(&str, Option<&str>, usize)> = result
        .records
        .iter()
        .map(|r| (r.name.as_str(), r.category.as_deref(), r.line_items.len()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Lentil Soup", Some("Soups"), 2),
            ("Tomato Soup", Some("Soups"), 1),
            ("Greek Salad", Some("Salads"), 2),
        ]
    );
}

#[test]
fn test_derived_totals_per_record() {
    let result = extract(&three_recipe_grid());

    // metadata yield
    assert_eq!(result.records[0].serving.total_yield_grams, 500.0);
    assert_eq!(result.records[0].serving.scale_factor, 5.0);
    // ingredient sum
    assert_eq!(result.records[1].serving.total_yield_grams, 400.0);
    assert_eq!(result.records[1].serving.scale_factor, 4.0);
    assert_eq!(result.records[2].serving.total_yield_grams, 200.0);
    assert_eq!(result.records[2].serving.serving_size_grams, 100.0);
}

#[test]
fn test_marker_without_name_is_dropped() {
    let grid = SheetBuilder::new()
        .label(0, "Soups")
        .label(1, "Far Away Name")
        .meta(2, "Notes", CellValue::text("x"))
        .meta(3, "Notes", CellValue::text("x"))
        .meta(4, "Notes", CellValue::text("x"))
        .meta(5, "Notes", CellValue::text("x"))
        .marker(6, "R-1")
        .label(7, "Ingredients")
        .ingredient(8, 1.0, "Salt", 1.0)
        .build();

    let result = extract(&grid);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.markers_found, 1);
    assert_eq!(result.stats.unnamed_markers, 1);
    assert_eq!(result.stats.dropped(), 1);
}

#[test]
fn test_output_never_exceeds_marker_count() {
    let grid = SheetBuilder::new()
        .label(0, "Lentil Soup")
        .marker(1, "R-1")
        .label(2, "Ingredients")
        .ingredient(3, 1.0, "Lentils", 100.0)
        .ingredient(4, 2.0, "Water", 100.0)
        .ingredient(5, 3.0, "Salt", 1.0)
        .ingredient(6, 4.0, "Cumin", 1.0)
        .marker(8, "R-2")
        .label(9, "Ingredients")
        .ingredient(10, 1.0, "Water", 100.0)
        .build();

    let result = extract(&grid);

    assert_eq!(result.stats.markers_found, 2);
    assert_eq!(result.records.len(), 1);
    assert!(result.records.len() <= result.stats.markers_found);
    assert_eq!(result.stats.unnamed_markers, 1);
}

#[test]
fn test_record_without_ingredient_section_is_dropped() {
    let grid = SheetBuilder::new()
        .label(0, "Lonely Recipe")
        .marker(1, "R-1")
        .meta(2, "Total Yield", CellValue::Number(100.0))
        .build();

    let result = extract(&grid);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.missing_ingredient_sections, 1);
    assert_eq!(result.stats.messages.len(), 1);
}

#[test]
fn test_date_and_header_rows_are_not_names() {
    let grid = SheetBuilder::new()
        .label(0, "Breads")
        .label(1, "Sourdough")
        .label(2, "BEN'S FARMHOUSE")
        .label(3, "2026-02-10")
        .marker(4, "R-1")
        .label(5, "Ingredients")
        .ingredient(6, 1.0, "Flour", 500.0)
        .build();

    let result = extract(&grid);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Sourdough");
    assert_eq!(result.records[0].category.as_deref(), Some("Breads"));
}

#[test]
fn test_malformed_ingredient_row_truncates_and_is_counted() {
    let grid = SheetBuilder::new()
        .label(0, "Stew")
        .marker(1, "R-1")
        .label(2, "Ingredients")
        .ingredient(3, 1.0, "Beef", 300.0)
        .text(4, columns::INGREDIENT_NAME, "Orphan Carrot")
        .ingredient(5, 2.0, "Potato", 200.0)
        .build();

    let result = extract(&grid);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].line_items.len(), 1);
    assert_eq!(result.records[0].serving.total_yield_grams, 300.0);
    assert_eq!(result.stats.malformed_line_item_rows, 1);
}

#[test]
fn test_extraction_is_idempotent() {
    let grid = three_recipe_grid();

    let first = extract(&grid);
    let second = extract(&grid);

    assert_eq!(first.records, second.records);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_identifiers_come_from_injected_generator() {
    let result = extract(&lentil_soup_grid());
    let record = &result.records[0];

    assert_eq!(record.line_items[0].entity_ingredient_id, "imported_recipe_1");
    assert_eq!(record.line_items[2].entity_ingredient_id, "imported_recipe_3");
    assert_eq!(record.id, "recipe_4");
}

#[test]
fn test_custom_sentinel() {
    let grid = SheetBuilder::new()
        .label(0, "Tart")
        .text(1, columns::DATA, "Dish Code")
        .label(2, "Ingredients")
        .ingredient(3, 1.0, "Butter", 50.0)
        .build();

    let default_result = extract(&grid);
    let custom_result = RecipeExtractor::new("Dish Code")
        .extract(&grid, &mut SequentialIdGenerator::new("recipe"));

    assert!(default_result.records.is_empty());
    assert_eq!(custom_result.records.len(), 1);
    assert_eq!(custom_result.records[0].name, "Tart");
}

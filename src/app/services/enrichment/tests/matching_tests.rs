//! Tests for recipe selection and matching

use super::*;
use crate::app::services::enrichment::{match_recipes, select_missing_nutrition};
use crate::app::services::nutrient_sheet::NutrientTable;

fn table(profiles: Vec<NutrientProfile>) -> NutrientTable {
    let mut table = NutrientTable::new();
    for profile in profiles {
        table.insert(profile);
    }
    table
}

#[test]
fn test_select_missing_nutrition() {
    let recipes = vec![
        stored_recipe("1", "No Nutrition", None),
        with_nutrition(stored_recipe("2", "Empty", None), empty_nutrition()),
        with_nutrition(stored_recipe("3", "Null", None), json!({ "per_serving": null })),
        with_nutrition(
            stored_recipe("4", "Done", None),
            json!({ "per_serving": { "Energy": { "unit": "kcal", "quantity": 1 } } }),
        ),
    ];

    let missing = select_missing_nutrition(recipes);

    let ids: Vec<&str> = missing.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_match_exact_then_name_only() {
    let table = table(vec![
        profile("Lentil Soup", "Soups"),
        profile("Hummus", "Dips"),
    ]);
    let recipes = vec![
        stored_recipe("1", "Lentil Soup", Some("Soups")),
        stored_recipe("2", "Hummus", Some("Mezze")),
        stored_recipe("3", "Falafel", Some("Mezze")),
        stored_recipe("4", "Lentil Soup", None),
    ];

    let report = match_recipes(recipes, &table);

    assert_eq!(report.matched_count(), 3);
    assert_eq!(report.unmatched_count(), 1);
    assert_eq!(report.unmatched[0].name, "Falafel");
    assert_eq!(report.matched[1].recipe.id, "2");
    assert_eq!(report.matched[1].profile.category, "Dips");
    assert_eq!(report.matched[2].profile.name, "Lentil Soup");
}

#[test]
fn test_missing_category_matches_empty_category() {
    let table = table(vec![profile("Plain Rice", ""), profile("Plain Rice", "Sides")]);

    let report = match_recipes(vec![stored_recipe("1", "Plain Rice", None)], &table);

    assert_eq!(report.matched[0].profile.category, "");
}

#[test]
fn test_match_report_rate_and_summary() {
    let report = match_recipes(Vec::new(), &NutrientTable::new());
    assert_eq!(report.match_rate(), 0.0);

    let table = table(vec![profile("A", "")]);
    let report = match_recipes(
        vec![stored_recipe("1", "A", None), stored_recipe("2", "B", None)],
        &table,
    );
    assert_eq!(report.match_rate(), 50.0);
    assert!(report.summary().contains("1 matched, 1 unmatched"));
}

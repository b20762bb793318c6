//! Fixtures for enrichment tests

use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::app::models::{NutrientProfile, NutrientValue, StoredRecipe};

mod matching_tests;

pub fn stored_recipe(id: &str, name: &str, category: Option<&str>) -> StoredRecipe {
    StoredRecipe {
        id: id.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
        nutrition: None,
        serving: None,
        status: Some("IMPORTED".to_string()),
    }
}

pub fn with_serving(mut recipe: StoredRecipe, serving: Value) -> StoredRecipe {
    recipe.serving = Some(serving);
    recipe
}

pub fn with_nutrition(mut recipe: StoredRecipe, nutrition: Value) -> StoredRecipe {
    recipe.nutrition = Some(nutrition);
    recipe
}

pub fn profile(name: &str, category: &str) -> NutrientProfile {
    let mut per_serving = BTreeMap::new();
    per_serving.insert(
        "Energy".to_string(),
        NutrientValue {
            unit: "kcal".to_string(),
            quantity: 150.0,
        },
    );
    per_serving.insert(
        "Protein".to_string(),
        NutrientValue {
            unit: "g".to_string(),
            quantity: 3.33333,
        },
    );

    NutrientProfile {
        name: name.to_string(),
        category: category.to_string(),
        sub_category: None,
        status: String::new(),
        serving_weight: 250.0,
        per_serving,
        allergens: vec!["Celery".to_string()],
        may_contain_allergens: vec!["Nuts".to_string()],
        ingredient_names: vec!["Lentils".to_string(), "Water".to_string()],
    }
}

pub fn empty_nutrition() -> Value {
    json!({ "per_serving": {} })
}

//! Data models for recipe import and enrichment
//!
//! This module contains the records reconstructed from the recipe sheet, the
//! nutrient profiles read from the nutrient sheet, and the recipe rows returned
//! by the record store.

use crate::constants::{
    DEFAULT_SERVING_SIZE_GRAMS, DEFAULT_TOTAL_YIELD_GRAMS, SUB_RECIPE_CATEGORY,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// =============================================================================
// Extracted Recipe Structures
// =============================================================================

/// One ingredient row of a recipe's ingredient table
///
/// `quantity_in_grams` is derived once while the row is parsed and never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Ordinal printed in the label column
    pub ordinal: i64,

    /// Ingredient identifier from the sheet, empty when absent
    pub ingredient_id: String,

    /// Ingredient display name, empty when absent
    pub name: String,

    /// Type/source tag (e.g. "Ingredient", "Sub Recipe")
    pub source: String,

    /// Referenced sub-recipe name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_recipe_name: Option<String>,

    /// Raw quantity cell
    pub quantity: Option<f64>,

    /// Yield percentage (defaults to 100)
    pub yield_percent: f64,

    /// Yield-adjusted quantity cell
    pub yield_quantity: Option<f64>,

    /// Line cost (defaults to 0)
    pub cost: f64,

    /// Effective quantity: yield quantity, else raw quantity, else zero
    pub quantity_in_grams: f64,

    /// Generated per-ingredient identifier
    pub entity_ingredient_id: String,
}

impl LineItem {
    /// Effective quantity from the yield-adjusted and raw quantity cells
    ///
    /// A zero yield quantity counts as missing.
    pub fn effective_quantity(yield_quantity: Option<f64>, quantity: Option<f64>) -> f64 {
        yield_quantity
            .filter(|q| *q != 0.0)
            .or(quantity)
            .unwrap_or(0.0)
    }
}

/// Scalar fields read from the metadata block below a marker row
///
/// Fields that are missing or fail to parse stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub source_recipe_id: Option<String>,
    pub total_yield: Option<f64>,
    pub total_calories: Option<f64>,
    pub per_serving_weight: Option<f64>,
    pub description: Option<String>,
    pub preparation_time_minutes: Option<i64>,
}

/// Batch and serving sizes with the ratio between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServingInfo {
    pub total_yield_grams: f64,
    pub serving_size_grams: f64,
    /// `total_yield_grams / serving_size_grams`, rounded to two decimals
    pub scale_factor: f64,
}

impl ServingInfo {
    /// Derive serving information from metadata and collected line items
    ///
    /// Serving size falls back to 100 g when absent or non-positive. Total yield
    /// falls back to the sum of ingredient quantities, then to 100 g.
    pub fn derive(metadata: &RecordMetadata, line_items: &[LineItem]) -> Self {
        let serving_size_grams = metadata
            .per_serving_weight
            .filter(|weight| *weight > 0.0)
            .unwrap_or(DEFAULT_SERVING_SIZE_GRAMS);

        let total_yield_grams = match metadata.total_yield.filter(|y| *y != 0.0) {
            Some(total_yield) => total_yield,
            None => {
                let sum: f64 = line_items.iter().map(|item| item.quantity_in_grams).sum();
                if sum == 0.0 {
                    DEFAULT_TOTAL_YIELD_GRAMS
                } else {
                    sum
                }
            }
        };

        Self {
            total_yield_grams,
            serving_size_grams,
            scale_factor: scale_factor(total_yield_grams, serving_size_grams),
        }
    }
}

/// Ratio of batch yield to serving size, rounded to two decimals
///
/// Returns 1 when the serving size is zero or negative.
pub fn scale_factor(total_yield_grams: f64, serving_size_grams: f64) -> f64 {
    if serving_size_grams > 0.0 {
        round_to(total_yield_grams / serving_size_grams, 2)
    } else {
        1.0
    }
}

/// Round half away from zero to the given number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A recipe reconstructed from the recipe sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Generated recipe identifier
    pub id: String,

    /// Recipe name from the nearest label-only row above the marker
    pub name: String,

    /// Sticky category in effect when the marker was reached
    pub category: Option<String>,

    /// Metadata block values
    pub metadata: RecordMetadata,

    /// Ingredient rows in sheet order
    pub line_items: Vec<LineItem>,

    /// Derived serving information
    pub serving: ServingInfo,

    /// 0-based grid row of the marker this record was built from
    pub marker_row: usize,
}

impl Record {
    /// Category or empty string, as the record store expects
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Number of ingredient rows
    pub fn line_item_count(&self) -> usize {
        self.line_items.len()
    }
}

// =============================================================================
// Nutrient Sheet Structures
// =============================================================================

/// One nutrient amount with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientValue {
    pub unit: String,
    pub quantity: f64,
}

/// Nutrition and labelling data for one recipe from the nutrient sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub status: String,
    pub serving_weight: f64,
    /// Per-serving amounts keyed by nutrient display name
    pub per_serving: BTreeMap<String, NutrientValue>,
    pub allergens: Vec<String>,
    pub may_contain_allergens: Vec<String>,
    pub ingredient_names: Vec<String>,
}

impl NutrientProfile {
    /// Per-serving quantity of a nutrient, zero when absent
    pub fn quantity_of(&self, nutrient: &str) -> f64 {
        self.per_serving
            .get(nutrient)
            .map(|value| value.quantity)
            .unwrap_or(0.0)
    }

    /// Whether the sheet marks this entry as a sub-recipe
    pub fn is_sub_recipe(&self) -> bool {
        self.sub_category.as_deref() == Some(SUB_RECIPE_CATEGORY)
    }
}

// =============================================================================
// Record Store Structures
// =============================================================================

/// Recipe row as returned by the record store listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Value>,
    #[serde(default)]
    pub serving: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
}

impl StoredRecipe {
    /// Whether the recipe already carries per-serving nutrition
    pub fn has_per_serving_nutrition(&self) -> bool {
        self.nutrition
            .as_ref()
            .and_then(|nutrition| nutrition.get("per_serving"))
            .map(|per_serving| match per_serving {
                Value::Null => false,
                Value::Object(map) => !map.is_empty(),
                Value::Array(items) => !items.is_empty(),
                _ => true,
            })
            .unwrap_or(false)
    }

    /// Stored total yield, defaulting to 100 g
    pub fn total_yield_grams(&self) -> f64 {
        self.serving
            .as_ref()
            .and_then(|serving| serving.get("total_yield_grams"))
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_TOTAL_YIELD_GRAMS)
    }
}

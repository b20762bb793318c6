//! Patch payload for nutrition enrichment

use serde_json::{Map, Value, json};

use crate::app::models::{NutrientProfile, StoredRecipe, round_to, scale_factor};
use crate::constants::{
    DEFAULT_COST_CURRENCY, DEFAULT_VAT_PERCENT, ENERGY_NUTRIENT, IMPORTED_STATUS,
    NET_CARBS_NUTRIENT, SUB_RECIPE_CATEGORY,
};

const PER_RECIPE_DECIMALS: i32 = 4;

/// Build the patch body that fills in nutrition, labelling and cost defaults
///
/// Per-recipe totals are the per-serving amounts scaled by the stored total
/// yield over the sheet's serving weight.
pub fn build_update_payload(recipe: &StoredRecipe, profile: &NutrientProfile) -> Value {
    let total_yield = recipe.total_yield_grams();
    let serving_weight = profile.serving_weight;
    let scale = if serving_weight > 0.0 {
        total_yield / serving_weight
    } else {
        1.0
    };

    let per_recipe_total: Map<String, Value> = profile
        .per_serving
        .iter()
        .map(|(nutrient, value)| {
            (
                nutrient.clone(),
                json!({
                    "unit": value.unit,
                    "quantity": round_to(value.quantity * scale, PER_RECIPE_DECIMALS),
                }),
            )
        })
        .collect();

    let mut serving = match &recipe.serving {
        Some(Value::Object(existing)) => existing.clone(),
        _ => Map::new(),
    };
    serving.insert("serving_size_grams".to_string(), json!(serving_weight));
    serving.insert(
        "scale_factor".to_string(),
        json!(scale_factor(total_yield, serving_weight)),
    );

    let is_sub_recipe =
        profile.is_sub_recipe() || recipe.category.as_deref() == Some(SUB_RECIPE_CATEGORY);

    let status = if profile.status.is_empty() {
        IMPORTED_STATUS
    } else {
        profile.status.as_str()
    };

    let mut update = json!({
        "nutrition": {
            "summary": {
                "calories": profile.quantity_of(ENERGY_NUTRIENT),
                "net_carbs": profile.quantity_of(NET_CARBS_NUTRIENT),
            },
            "per_serving": profile.per_serving,
            "per_recipe_total": per_recipe_total,
            "total_yield_grams": total_yield,
            "serving_size_grams": serving_weight,
        },
        "serving": serving,
        "allergens": profile.allergens,
        "may_contain_allergens": profile.may_contain_allergens,
        "status": status,
        "costs": cost_defaults(),
        "labels": {
            "allergen_list": profile.allergens,
            "diet_type_list": [],
            "ingredient_list": profile.ingredient_names,
            "business_address_list": [],
        },
        "metadata": {
            "qr_image": null,
            "cover_image": null,
            "is_sub_recipe": is_sub_recipe,
            "packaging_logo": null,
            "is_imported_recipe": true,
        },
    });

    if let (Some(sub_category), Some(body)) = (&profile.sub_category, update.as_object_mut()) {
        body.insert("sub_category".to_string(), json!(sub_category));
    }

    update
}

/// Zeroed cost block with the default VAT rate and currency
fn cost_defaults() -> Value {
    json!({
        "food_cost": 0,
        "net_profit": 0,
        "total_cost": 0,
        "labour_cost": 0,
        "vat_percent": DEFAULT_VAT_PERCENT,
        "wastage_cost": 0,
        "food_cost_type": DEFAULT_COST_CURRENCY,
        "packaging_cost": 0,
        "labour_cost_type": DEFAULT_COST_CURRENCY,
        "wastage_cost_type": "percentage",
        "selling_price_exc_vat": 0,
        "selling_price_inc_vat": 0,
        "total_ingredient_cost": 0,
    })
}

//! Create payloads for extracted records

use serde_json::{Value, json};

use crate::app::models::{LineItem, Record};
use crate::constants::{IMPORTED_STATUS, INGREDIENT_UNIT};

/// JSON body for creating `record` under `owner_email`
///
/// The source recipe id from the sheet stays on the record and is not sent.
pub fn recipe_payload(record: &Record, owner_email: &str) -> Value {
    let serving = &record.serving;
    let ingredients: Vec<Value> = record.line_items.iter().map(ingredient_payload).collect();

    json!({
        "id": record.id,
        "name": record.name,
        "category": record.category_or_empty(),
        "status": IMPORTED_STATUS,
        "description": record.metadata.description.as_deref().unwrap_or_default(),
        "preparation_time_minutes": record.metadata.preparation_time_minutes,
        "owner_email": owner_email,
        "serving": {
            "scale_factor": serving.scale_factor,
            "serving_unit": "g",
            "total_yield_grams": serving.total_yield_grams,
            "serving_size_grams": serving.serving_size_grams,
            "serving_description": "",
            "servings_per_package": 1,
            "total_cooked_weight_grams": serving.total_yield_grams,
        },
        "diet_types": [],
        "allergens": [],
        "may_contain_allergens": [],
        "nutrition": {
            "summary": {
                "calories": record.metadata.total_calories.unwrap_or(0.0),
                "net_carbs": 0,
            },
            "per_serving": {},
            "per_recipe_total": {},
            "total_yield_grams": serving.total_yield_grams,
            "serving_size_grams": serving.serving_size_grams,
        },
        "ingredients": ingredients,
        "inventory": {
            "stock_unit": "portions",
            "stock_quantity": 0,
            "min_stock_alert": null,
            "last_stock_update": null,
        },
    })
}

fn ingredient_payload(item: &LineItem) -> Value {
    let mut ingredient = json!({
        "name": item.name,
        "unit": INGREDIENT_UNIT,
        "source": item.source,
        "quantity": item.quantity_in_grams,
        "cost": item.cost,
        "allergens": [],
        "yield_percent": item.yield_percent,
        "quantity_in_grams": item.quantity_in_grams,
        "yield_quantity_in_grams": item.quantity_in_grams,
        "ingredient_id": item.ingredient_id,
        "entity_ingredient_id": item.entity_ingredient_id,
        "is_starred": false,
        "user_allergens": [],
        "composite_ingredients": [],
        "may_contain_allergens": [],
        "user_may_contain_allergens": [],
        "nutrients": {},
    });

    if let (Some(sub_recipe), Some(body)) = (&item.sub_recipe_name, ingredient.as_object_mut()) {
        body.insert("sub_recipe_name".to_string(), json!(sub_recipe));
    }

    ingredient
}

//! Selection and matching of stored recipes against nutrient profiles

use tracing::{debug, info};

use crate::app::models::{NutrientProfile, StoredRecipe};
use crate::app::services::nutrient_sheet::NutrientTable;

/// A stored recipe paired with the nutrient profile it will be updated from
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMatch {
    pub recipe: StoredRecipe,
    pub profile: NutrientProfile,
}

/// Outcome of matching stored recipes against the nutrient table
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    pub matched: Vec<RecipeMatch>,
    pub unmatched: Vec<StoredRecipe>,
}

impl MatchReport {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Percentage of recipes that found a profile
    pub fn match_rate(&self) -> f64 {
        let total = self.matched.len() + self.unmatched.len();
        if total == 0 {
            0.0
        } else {
            (self.matched.len() as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Match Summary: {} matched, {} unmatched ({:.1}% matched)",
            self.matched_count(),
            self.unmatched_count(),
            self.match_rate()
        )
    }
}

/// Keep recipes whose nutrition has no per-serving data yet
pub fn select_missing_nutrition(recipes: Vec<StoredRecipe>) -> Vec<StoredRecipe> {
    let total = recipes.len();
    let missing: Vec<StoredRecipe> = recipes
        .into_iter()
        .filter(|recipe| !recipe.has_per_serving_nutrition())
        .collect();

    info!(
        "{} of {} stored recipes are missing nutrition data",
        missing.len(),
        total
    );
    missing
}

/// Pair each recipe with a profile by `(name, category)`, falling back to name only
pub fn match_recipes(recipes: Vec<StoredRecipe>, table: &NutrientTable) -> MatchReport {
    let mut report = MatchReport::default();

    for recipe in recipes {
        let category = recipe.category.as_deref().unwrap_or_default();

        match table.lookup(&recipe.name, category) {
            Some(profile) => {
                if profile.category != category {
                    debug!(
                        "'{}' matched by name only ([{}] vs [{}])",
                        recipe.name, category, profile.category
                    );
                }
                report.matched.push(RecipeMatch {
                    profile: profile.clone(),
                    recipe,
                });
            }
            None => {
                debug!("No nutrient data for '{}' [{}]", recipe.name, category);
                report.unmatched.push(recipe);
            }
        }
    }

    info!("{}", report.summary());
    report
}

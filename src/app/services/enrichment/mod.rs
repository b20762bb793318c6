//! Nutrition enrichment for previously imported recipes
//!
//! Stored recipes that still lack per-serving nutrition are matched against
//! the nutrient sheet and turned into patch payloads:
//!
//! 1. [`select_missing_nutrition`] keeps recipes without per-serving data
//! 2. [`match_recipes`] pairs them with nutrient profiles
//! 3. [`build_update_payload`] scales nutrients to the stored yield and builds
//!    the patch body

pub mod matching;
pub mod payload;

#[cfg(test)]
pub mod tests;

pub use matching::{MatchReport, RecipeMatch, match_recipes, select_missing_nutrition};
pub use payload::build_update_payload;

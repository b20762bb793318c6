//! Application constants for the recipe importer
//!
//! This module contains sheet layout constants, label vocabularies, scan window
//! sizes and store defaults used throughout the importer.

// =============================================================================
// Workbook and Sheet Names
// =============================================================================

/// Worksheet holding the recipe cards
pub const DEFAULT_RECIPE_SHEET: &str = "Recipes";

/// Worksheet holding the nutrient table
pub const DEFAULT_NUTRIENT_SHEET: &str = "Sheet1";

/// Label in the data column that opens a recipe's metadata block
pub const DEFAULT_SENTINEL_LABEL: &str = "Recipe ID";

// =============================================================================
// Recipe Sheet Layout (0-based column indexes, A = 0)
// =============================================================================

/// Column positions on the recipe sheet
pub mod columns {
    /// Free-text labels: names, categories, section headers, ingredient ordinals
    pub const LABEL: usize = 0;
    /// Metadata labels and ingredient identifiers
    pub const DATA: usize = 1;
    /// Metadata values and ingredient names
    pub const VALUE: usize = 2;

    /// Secondary metadata label columns (F, G); the value sits one column right
    pub const SECONDARY_LABELS: &[usize] = &[5, 6];

    pub const INGREDIENT_ID: usize = 1;
    pub const INGREDIENT_NAME: usize = 2;
    pub const INGREDIENT_TYPE: usize = 3;
    pub const SUB_RECIPE: usize = 4;
    pub const QUANTITY: usize = 5;
    pub const YIELD_PERCENT: usize = 6;
    pub const YIELD_QUANTITY: usize = 7;
    pub const COST: usize = 8;
}

/// Labels recognised on the recipe sheet
pub mod labels {
    pub const RECIPE_ID: &str = "Recipe ID";
    pub const TOTAL_YIELD: &str = "Total Yield";
    pub const DESCRIPTION: &str = "Description";
    pub const PREPARATION_TIME: &str = "Preparation Time";
    pub const CALORIES: &str = "Calories";
    pub const PER_SERVING_WEIGHT: &str = "Per Serving Weight";

    /// Section label preceding the ingredient table
    pub const INGREDIENTS: &str = "Ingredients";

    /// Optional sub-header directly below the section label
    pub const ORDINAL_HEADER: &str = "S.No";

    /// Label-only values that are never recipe names or categories
    pub const NON_NAME_HEADERS: &[&str] = &["BEN'S FARMHOUSE", INGREDIENTS, ORDINAL_HEADER];
}

// =============================================================================
// Scan Windows
// =============================================================================

/// Rows inspected above a marker for the name, and above the name for a category
pub const NAME_LOOKBEHIND_ROWS: usize = 4;

/// Rows from the marker scanned for metadata pairs
pub const METADATA_LOOKAHEAD_ROWS: usize = 8;

/// Rows from the marker searched for the ingredient section label
pub const INGREDIENTS_LOOKAHEAD_ROWS: usize = 12;

/// Date-looking labels are only rejected below this length
pub const DATE_LIKE_MAX_LEN: usize = 25;

// =============================================================================
// Business Defaults
// =============================================================================

/// Serving size used when the sheet gives none (grams)
pub const DEFAULT_SERVING_SIZE_GRAMS: f64 = 100.0;

/// Total yield used when neither metadata nor ingredients provide one (grams)
pub const DEFAULT_TOTAL_YIELD_GRAMS: f64 = 100.0;

/// Yield percentage assumed for ingredients without one
pub const DEFAULT_YIELD_PERCENT: f64 = 100.0;

/// Source tag for ingredient rows without a type
pub const DEFAULT_INGREDIENT_SOURCE: &str = "Ingredient";

/// Unit attached to every imported ingredient quantity
pub const INGREDIENT_UNIT: &str = "G";

/// Status stamped on freshly imported recipes
pub const IMPORTED_STATUS: &str = "IMPORTED";

/// Category value marking a recipe as a sub-recipe
pub const SUB_RECIPE_CATEGORY: &str = "SUB-RECIPE";

/// Prefix of per-ingredient entity identifiers
pub const ENTITY_INGREDIENT_PREFIX: &str = "imported_";

// =============================================================================
// Record Store Defaults
// =============================================================================

/// Table receiving the recipes
pub const DEFAULT_STORE_TABLE: &str = "recipes";

/// Records per create request
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Pause between create batches in milliseconds
pub const DEFAULT_BATCH_DELAY_MS: u64 = 200;

/// Progress is logged every N patch requests
pub const DEFAULT_UPDATE_PROGRESS_INTERVAL: usize = 50;

/// Pause after each progress interval of patch requests in milliseconds
pub const DEFAULT_UPDATE_PAUSE_MS: u64 = 100;

/// Maximum rows returned by a recipe listing
pub const STORE_FETCH_LIMIT: usize = 1000;

/// Environment variables consulted when loading configuration
pub mod env_vars {
    pub const STORE_URL: &str = "RECIPE_STORE_URL";
    pub const STORE_KEY: &str = "RECIPE_STORE_KEY";
    pub const OWNER_EMAIL: &str = "RECIPE_OWNER_EMAIL";
}

// =============================================================================
// Nutrient Sheet Layout (0-based column indexes)
// =============================================================================

/// Column positions on the nutrient sheet
pub mod nutrient_columns {
    pub const NAME: usize = 1;
    pub const CATEGORY: usize = 2;
    pub const SUB_CATEGORY: usize = 3;
    pub const STATUS: usize = 4;
    pub const SERVING_WEIGHT: usize = 5;
    pub const INGREDIENTS: usize = 6;
    pub const ALLERGENS: usize = 7;
    pub const MAY_CONTAIN: usize = 8;

    /// First data row (row 0 holds headers)
    pub const FIRST_DATA_ROW: usize = 1;
}

/// Nutrient name used for the calorie summary
pub const ENERGY_NUTRIENT: &str = "Energy";

/// Nutrient name used for the net carbohydrate summary
pub const NET_CARBS_NUTRIENT: &str = "Net Carbohydrates";

/// Nutrient columns on the nutrient sheet: (column, display name, unit)
pub const NUTRIENT_COLUMNS: &[(usize, &str, &str)] = &[
    (10, "Energy", "kcal"),
    (11, "Total Carbohydrates", "g"),
    (12, "Protein", "g"),
    (13, "Total Fat", "g"),
    (14, "Dietary Fiber", "g"),
    (15, "Net Carbohydrates", "g"),
    (16, "Calcium", "mg"),
    (17, "Sodium", "mg"),
    (18, "Iron", "mg"),
    (19, "Potassium", "mg"),
    (20, "Saturated Fat", "g"),
    (21, "Trans Fat", "g"),
    (22, "Total Sugar", "g"),
    (23, "Cholesterol", "mg"),
    (24, "Vitamin D", "mcg"),
    (25, "Phosphorus", "mg"),
    (26, "Sugar Alcohol", "g"),
    (27, "Added Sugar", "g"),
    (28, "Salt", "g"),
    (29, "Magnesium", "mg"),
    (30, "Pantothenic acid", "mg"),
    (31, "Polyunsaturated Fat", "g"),
    (32, "Manganese", "mg"),
    (33, "Vitamin A", "mcg"),
    (34, "Vitamin E", "mg"),
    (35, "Vitamin C", "mg"),
    (36, "Vitamin B6", "mg"),
    (37, "Zinc", "mg"),
    (38, "Thiamin", "mg"),
    (39, "Niacin", "mg"),
    (40, "Monounsaturated Fat", "g"),
    (41, "Copper", "mg"),
    (42, "Selenium", "mcg"),
    (43, "Riboflavin", "mg"),
    (44, "Folate", "mcg"),
    (45, "Vitamin B12", "mcg"),
    (46, "Vitamin K", "mcg"),
    (47, "Caffeine", "mg"),
];

/// VAT percentage written into the default cost block
pub const DEFAULT_VAT_PERCENT: u32 = 5;

/// Currency used in the default cost block
pub const DEFAULT_COST_CURRENCY: &str = "AED";

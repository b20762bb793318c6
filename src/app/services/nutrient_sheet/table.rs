//! Lookup table over parsed nutrient profiles

use std::collections::HashMap;

use crate::app::models::NutrientProfile;

/// Nutrient profiles in sheet order, indexed by `(name, category)`
///
/// A later row with the same key replaces the earlier profile but keeps its
/// position, so name-only lookups still see the first occurrence in the sheet.
#[derive(Debug, Clone, Default)]
pub struct NutrientTable {
    profiles: Vec<NutrientProfile>,
    index: HashMap<(String, String), usize>,
    /// Data rows skipped because the name column was empty
    pub skipped_rows: usize,
}

impl NutrientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile, replacing any existing profile with the same key
    pub fn insert(&mut self, profile: NutrientProfile) {
        let key = (profile.name.clone(), profile.category.clone());
        match self.index.get(&key) {
            Some(&position) => self.profiles[position] = profile,
            None => {
                self.index.insert(key, self.profiles.len());
                self.profiles.push(profile);
            }
        }
    }

    /// Exact `(name, category)` match
    pub fn get(&self, name: &str, category: &str) -> Option<&NutrientProfile> {
        self.index
            .get(&(name.to_string(), category.to_string()))
            .map(|&position| &self.profiles[position])
    }

    /// First profile with this name in sheet order
    pub fn first_by_name(&self, name: &str) -> Option<&NutrientProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Exact match first, then the name-only fallback
    pub fn lookup(&self, name: &str, category: &str) -> Option<&NutrientProfile> {
        self.get(name, category)
            .or_else(|| self.first_by_name(name))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientProfile> {
        self.profiles.iter()
    }
}

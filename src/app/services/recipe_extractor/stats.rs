//! Extraction statistics and result structures
//!
//! Dropped markers are not errors; they are counted here and reported to the
//! operator as an informational summary.

use crate::app::models::Record;

/// Counters for one extraction run
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtractionStats {
    /// Marker rows found in the grid
    pub markers_found: usize,

    /// Records emitted
    pub records_extracted: usize,

    /// Markers skipped because no name was found above them
    pub unnamed_markers: usize,

    /// Named markers skipped because no ingredient section followed
    pub missing_ingredient_sections: usize,

    /// Records whose ingredient table ended on a malformed row
    pub malformed_line_item_rows: usize,

    /// Human-readable notes about dropped or truncated records
    pub messages: Vec<String>,
}

impl ExtractionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            markers_found: 0,
            records_extracted: 0,
            unnamed_markers: 0,
            missing_ingredient_sections: 0,
            malformed_line_item_rows: 0,
            messages: Vec::new(),
        }
    }

    /// Record a note for the operator
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Markers that did not produce a record
    pub fn dropped(&self) -> usize {
        self.unnamed_markers + self.missing_ingredient_sections
    }

    /// Percentage of markers that produced a record
    pub fn extraction_rate(&self) -> f64 {
        if self.markers_found == 0 {
            100.0
        } else {
            (self.records_extracted as f64 / self.markers_found as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Extraction Summary: {} markers -> {} records ({:.1}%) | \
             Unnamed: {} | No ingredients: {} | Truncated tables: {}",
            self.markers_found,
            self.records_extracted,
            self.extraction_rate(),
            self.unnamed_markers,
            self.missing_ingredient_sections,
            self.malformed_line_item_rows
        )
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Records extracted from one grid together with the run statistics
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub records: Vec<Record>,
    pub stats: ExtractionStats,
}

impl ExtractionResult {
    pub fn new(records: Vec<Record>, stats: ExtractionStats) -> Self {
        Self { records, stats }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Record counts per category, sorted by category; uncategorised records
    /// are listed as "Uncategorized"
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for record in &self.records {
            let category = record
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or("Uncategorized");
            *counts.entry(category.to_string()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }
}

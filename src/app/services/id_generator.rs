//! Identifier generation for imported recipes and ingredients
//!
//! Extraction takes an [`IdGenerator`] so that tests can supply deterministic
//! identifiers while production runs use timestamped random ones.

use chrono::Utc;
use rand::Rng;

const ID_SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_SUFFIX_LEN: usize = 9;

/// Source of record identifiers
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}

/// Generates `recipe_{unix_millis}_{9 random lowercase alphanumerics}`
#[derive(Debug, Default)]
pub struct TimestampIdGenerator;

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> String {
        let mut rng = rand::rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_SUFFIX_CHARSET[rng.random_range(0..ID_SUFFIX_CHARSET.len())] as char)
            .collect();
        format!("recipe_{}_{}", Utc::now().timestamp_millis(), suffix)
    }
}

/// Deterministic `{prefix}_{n}` identifiers
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

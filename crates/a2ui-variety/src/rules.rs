//! Diversity rules

use serde::{Deserialize, Serialize};

/// Default minimum number of distinct types in a sequence
pub const MIN_UNIQUE_TYPES: usize = 4;

/// Default longest allowed run of one type
pub const MAX_CONSECUTIVE_SAME_TYPE: usize = 2;

/// Thresholds a sequence is judged against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarietyRules {
    /// Distinct types the full sequence must use
    pub min_unique_types: usize,
    /// Longest run of identical consecutive types
    pub max_consecutive_same_type: usize,
}

impl Default for VarietyRules {
    fn default() -> Self {
        Self {
            min_unique_types: MIN_UNIQUE_TYPES,
            max_consecutive_same_type: MAX_CONSECUTIVE_SAME_TYPE,
        }
    }
}

impl VarietyRules {
    /// Create rules with explicit thresholds
    #[inline]
    #[must_use]
    pub fn new(min_unique_types: usize, max_consecutive_same_type: usize) -> Self {
        Self {
            min_unique_types,
            max_consecutive_same_type,
        }
    }
}

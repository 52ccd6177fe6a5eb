//! Validation result types

use crate::issue::{Issue, IssueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters gathered during one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    /// Descriptors that were inspected
    pub total_components: usize,
    /// Distinct non-empty type names seen
    pub unique_type_count: usize,
    /// Deepest inspected descriptor (root is 0)
    pub max_depth_observed: usize,
    /// Payload entries across all inspected descriptors
    pub total_payload_keys: usize,
    /// Occurrences per type name
    pub type_counts: BTreeMap<String, usize>,
}

/// Outcome of validating one tree or one batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Fatal findings, in discovery order
    pub errors: Vec<Issue>,
    /// Non-fatal findings, in discovery order
    pub warnings: Vec<Issue>,
    /// Pass counters
    pub stats: ValidationStats,
}

impl ValidationResult {
    /// Check validity
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check if any error of `kind` was raised
    #[must_use]
    pub fn has_error(&self, kind: IssueKind) -> bool {
        self.errors.iter().any(|issue| issue.kind == kind)
    }

    /// Check if any warning of `kind` was raised
    #[must_use]
    pub fn has_warning(&self, kind: IssueKind) -> bool {
        self.warnings.iter().any(|issue| issue.kind == kind)
    }

    /// Errors of one kind
    pub fn errors_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.errors.iter().filter(move |issue| issue.kind == kind)
    }

    /// Number of errors per kind
    #[must_use]
    pub fn error_counts(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.errors {
            *counts.entry(issue.kind).or_insert(0) += 1;
        }
        counts
    }
}

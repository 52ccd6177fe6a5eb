//! Variety analysis result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Maximal stretch of one type repeated back to back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Repeated type
    #[serde(rename = "type")]
    pub component_type: String,
    /// Length of the run
    pub count: usize,
    /// Position of the first element (0-based, inclusive)
    pub start_index: usize,
    /// Position of the last element (0-based, inclusive)
    pub end_index: usize,
}

/// Broken diversity rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    /// Nothing to analyze
    NoComponents,
    /// Too few distinct types
    InsufficientTypes {
        /// Distinct types present
        found: usize,
        /// Configured minimum
        required: usize,
    },
    /// Longest run exceeds the limit
    #[serde(rename_all = "camelCase")]
    ExcessiveRepetition {
        /// Longest run present
        max_run: usize,
        /// Configured limit
        limit: usize,
    },
    /// One run over the limit
    RunTooLong(Run),
}

impl Violation {
    /// Stable machine-readable code, matching the serialized `kind`
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoComponents => "NO_COMPONENTS",
            Self::InsufficientTypes { .. } => "INSUFFICIENT_TYPES",
            Self::ExcessiveRepetition { .. } => "EXCESSIVE_REPETITION",
            Self::RunTooLong(_) => "RUN_TOO_LONG",
        }
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoComponents => write!(f, "No components provided"),
            Self::InsufficientTypes { found, required } => write!(
                f,
                "Only {found} unique type(s), minimum required is {required}"
            ),
            Self::ExcessiveRepetition { max_run, limit } => write!(
                f,
                "Found {max_run} consecutive same type, maximum allowed is {limit}"
            ),
            Self::RunTooLong(run) => write!(
                f,
                "{} repeated {} times at positions {}-{}",
                run.component_type, run.count, run.start_index, run.end_index
            ),
        }
    }
}

/// Full diversity report for one sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyResult {
    /// Both rules met
    pub valid: bool,
    /// Sequence length
    pub total_components: usize,
    /// Distinct types present
    pub unique_type_count: usize,
    /// Longest run of one type (at least 1 for a non-empty sequence)
    pub max_run: usize,
    /// `unique_type_count` reaches the minimum
    pub meets_min_types: bool,
    /// `max_run` stays within the limit
    pub meets_no_consecutive: bool,
    /// Occurrences per type
    pub distribution: BTreeMap<String, usize>,
    /// Every run longer than 1, in sequence order
    pub runs: Vec<Run>,
    /// Broken rules, summary lines before per-run details
    pub violations: Vec<Violation>,
}

impl VarietyResult {
    /// Distribution ordered by descending count, then type name
    #[must_use]
    pub fn ranked_distribution(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .distribution
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// Violation messages, in order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// Runs longer than `limit`
    pub fn runs_over(&self, limit: usize) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(move |run| run.count > limit)
    }
}

//! Sequence diversity analysis
//!
//! [`VarietyAnalyzer`] judges a flat, ordered sequence of component types:
//! the full-batch [`analyze`](VarietyAnalyzer::analyze), and the incremental
//! pair [`would_violate`](VarietyAnalyzer::would_violate) /
//! [`suggest_next`](VarietyAnalyzer::suggest_next) for producers that emit
//! one component at a time.

use crate::result::{Run, VarietyResult, Violation};
use crate::rules::VarietyRules;
use a2ui_protocol::Typed;
use std::collections::{BTreeMap, HashMap};

/// Diversity analyzer over ordered type sequences
///
/// Sequences are slices of any [`Typed`] item: type names, descriptors or
/// untyped nodes.
///
/// # Example
///
/// ```rust
/// use a2ui_variety::VarietyAnalyzer;
///
/// let analyzer = VarietyAnalyzer::default();
/// let result = analyzer.analyze(&["A", "B", "B", "C", "D"]);
/// assert!(result.valid);
/// assert_eq!(result.max_run, 2);
///
/// assert!(analyzer.would_violate(&["X", "X"], "X"));
/// assert_eq!(analyzer.suggest_next(&["X", "X"], &["X", "Y"]), Some("Y"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VarietyAnalyzer {
    rules: VarietyRules,
}

impl VarietyAnalyzer {
    /// Create analyzer with custom rules
    #[inline]
    #[must_use]
    pub fn new(rules: VarietyRules) -> Self {
        Self { rules }
    }

    /// Active rules
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &VarietyRules {
        &self.rules
    }

    /// Full report over `sequence`
    #[must_use]
    pub fn analyze<T: Typed>(&self, sequence: &[T]) -> VarietyResult {
        if sequence.is_empty() {
            tracing::debug!("variety analysis on empty sequence");
            return VarietyResult {
                valid: false,
                meets_min_types: false,
                meets_no_consecutive: true,
                violations: vec![Violation::NoComponents],
                ..VarietyResult::default()
            };
        }

        let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut runs = Vec::new();
        let mut max_run = 0;
        let mut run_start = 0;

        for (i, item) in sequence.iter().enumerate() {
            let name = item.type_name();
            *distribution.entry(name.to_string()).or_insert(0) += 1;

            if i > 0 && sequence[i - 1].type_name() != name {
                close_run(sequence, run_start, i - 1, &mut max_run, &mut runs);
                run_start = i;
            }
        }
        close_run(sequence, run_start, sequence.len() - 1, &mut max_run, &mut runs);

        let unique_type_count = distribution.len();
        let meets_min_types = unique_type_count >= self.rules.min_unique_types;
        let meets_no_consecutive = max_run <= self.rules.max_consecutive_same_type;

        let mut violations = Vec::new();
        if !meets_min_types {
            violations.push(Violation::InsufficientTypes {
                found: unique_type_count,
                required: self.rules.min_unique_types,
            });
        }
        if !meets_no_consecutive {
            violations.push(Violation::ExcessiveRepetition {
                max_run,
                limit: self.rules.max_consecutive_same_type,
            });
            violations.extend(
                runs.iter()
                    .filter(|run| run.count > self.rules.max_consecutive_same_type)
                    .cloned()
                    .map(Violation::RunTooLong),
            );
        }

        tracing::debug!(
            components = sequence.len(),
            unique_types = unique_type_count,
            max_run,
            violations = violations.len(),
            "variety analysis finished"
        );

        VarietyResult {
            valid: meets_min_types && meets_no_consecutive,
            total_components: sequence.len(),
            unique_type_count,
            max_run,
            meets_min_types,
            meets_no_consecutive,
            distribution,
            runs,
            violations,
        }
    }

    /// Check whether appending `candidate` would break the run limit
    ///
    /// Only the trailing run matters; earlier occurrences of `candidate`
    /// elsewhere in `existing` do not count.
    #[must_use]
    pub fn would_violate<T: Typed>(&self, existing: &[T], candidate: &str) -> bool {
        match existing.last() {
            None => false,
            Some(last) if last.type_name() != candidate => false,
            Some(_) => trailing_run(existing, candidate) >= self.rules.max_consecutive_same_type,
        }
    }

    /// Suggest the least-used available type that does not repeat the last one
    ///
    /// Returns the first available type for an empty sequence, and `None`
    /// when every available type equals the last used type. Ties go to the
    /// earliest entry in `available`.
    #[must_use]
    pub fn suggest_next<'a, T: Typed, A: Typed>(
        &self,
        existing: &[T],
        available: &'a [A],
    ) -> Option<&'a str> {
        let Some(last) = existing.last() else {
            return available.first().map(Typed::type_name);
        };
        let last = last.type_name();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in existing {
            *counts.entry(item.type_name()).or_insert(0) += 1;
        }

        available
            .iter()
            .map(Typed::type_name)
            .filter(|name| *name != last)
            .min_by_key(|name| counts.get(*name).copied().unwrap_or(0))
    }
}

/// Length of the run of `name` ending the sequence
fn trailing_run<T: Typed>(sequence: &[T], name: &str) -> usize {
    sequence
        .iter()
        .rev()
        .take_while(|item| item.type_name() == name)
        .count()
}

fn close_run<T: Typed>(
    sequence: &[T],
    start: usize,
    end: usize,
    max_run: &mut usize,
    runs: &mut Vec<Run>,
) {
    let count = end - start + 1;
    *max_run = (*max_run).max(count);
    if count > 1 {
        runs.push(Run {
            component_type: sequence[start].type_name().to_string(),
            count,
            start_index: start,
            end_index: end,
        });
    }
}

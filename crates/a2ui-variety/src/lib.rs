//! A2UI Variety Analysis
//!
//! Judges the presentational diversity of a flat, ordered sequence of
//! component types (for example the top-level sections of a dashboard):
//!
//! - at least [`MIN_UNIQUE_TYPES`] distinct types
//! - no more than [`MAX_CONSECUTIVE_SAME_TYPE`] identical types in a row
//!
//! Besides the batch [`VarietyAnalyzer::analyze`], the analyzer answers two
//! incremental questions for streaming producers: would appending a type
//! break the run limit, and which available type should come next.
//!
//! # Example
//!
//! ```rust
//! use a2ui_variety::{VarietyAnalyzer, VarietyRules, Violation};
//!
//! let analyzer = VarietyAnalyzer::new(VarietyRules::default());
//! let result = analyzer.analyze(&["a2ui.StatCard", "a2ui.StatCard", "a2ui.StatCard"]);
//!
//! assert!(!result.valid);
//! assert!(matches!(result.violations[0], Violation::InsufficientTypes { found: 1, required: 4 }));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod analyzer;
mod report;
pub mod result;
pub mod rules;

// Re-exports
pub use analyzer::VarietyAnalyzer;
pub use result::{Run, VarietyResult, Violation};
pub use rules::{VarietyRules, MAX_CONSECUTIVE_SAME_TYPE, MIN_UNIQUE_TYPES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

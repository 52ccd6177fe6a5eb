//! A2UI Core - Dashboard Gate
//!
//! Composes the tree validator and the variety analyzer into one decision:
//! - [`DashboardGate`] judges a whole candidate dashboard, or many of them in
//!   parallel
//! - [`StreamSession`] admits sections one at a time for streaming producers
//! - [`GateConfig`] loads both analyses' settings and the merge policy from
//!   TOML
//!
//! # Example
//!
//! ```rust
//! use a2ui_core::{DashboardGate, GateConfig, GatePolicy};
//! use a2ui_protocol::ComponentRegistry;
//! use serde_json::json;
//!
//! let config = GateConfig::from_toml_str("[gate]\npolicy = \"advisory\"\n").unwrap();
//! let gate = DashboardGate::from_config(ComponentRegistry::with_defaults(), &config);
//!
//! let verdict = gate.check_json(&json!([
//!     { "id": "tldr-1", "type": "a2ui.TLDR", "payload": { "summary": "..." } },
//!     { "id": "stat-1", "type": "a2ui.StatCard", "payload": {} }
//! ])).unwrap();
//!
//! // Too few types, but variety is advisory under this policy
//! assert!(verdict.accepted);
//! assert_eq!(verdict.policy, GatePolicy::Advisory);
//! assert_eq!(verdict.advisories().count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod gate;
pub mod stream;

// Re-exports for convenience
pub use config::{GateConfig, GateSettings};
pub use error::{ConfigError, GateError, GateResult};
pub use gate::{DashboardGate, DashboardVerdict, Finding, FindingSource, GatePolicy, Severity};
pub use stream::{Admission, StreamSession};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for gating dashboards
    pub use crate::{Admission, DashboardGate, DashboardVerdict, GateConfig, GatePolicy};
    pub use a2ui_protocol::prelude::*;
    pub use a2ui_validation::{TreeValidator, ValidationOptions};
    pub use a2ui_variety::{VarietyAnalyzer, VarietyRules};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! A2UI Tree Validation
//!
//! Checks a component-descriptor tree (or a batch of sibling trees) against
//! the protocol contract:
//!
//! - required `id`, `type` and `payload` fields
//! - type naming convention (warning) and registration
//! - payload serializability, key by key
//! - identity uniqueness across the whole pass
//! - absence of self-containing descriptors
//! - depth bound
//! - shallow `layout` / `styling` shape
//!
//! Malformed data never fails a call: every problem becomes an [`Issue`] in
//! the [`ValidationResult`].
//!
//! # Example
//!
//! ```rust
//! use a2ui_protocol::ComponentRegistry;
//! use a2ui_validation::{IssueKind, TreeValidator, ValidationOptions};
//! use serde_json::json;
//!
//! let registry = ComponentRegistry::with_defaults();
//! let validator = TreeValidator::with_options(&registry, ValidationOptions::new().with_max_depth(4));
//!
//! let result = validator.validate_json(&json!({
//!     "id": "stat-1",
//!     "type": "a2ui.StatCard",
//!     "payload": { "value": "$196B", "label": "AI Market Size" }
//! }));
//! assert!(result.valid);
//!
//! let result = validator.validate_json(&json!({ "id": "", "type": "a2ui.StatCard", "payload": {} }));
//! assert!(result.has_error(IssueKind::MissingRequiredField));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod issue;
pub mod options;
mod report;
pub mod result;
pub mod validator;

// Re-exports
pub use error::{ContractError, ContractResult};
pub use issue::{Issue, IssueKind};
pub use options::{ValidationOptions, DEFAULT_MAX_DEPTH};
pub use result::{ValidationResult, ValidationStats};
pub use validator::{TreeValidator, LAYOUT_POSITIONS, ROOT_NAME};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

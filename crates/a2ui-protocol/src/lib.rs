//! A2UI Protocol Model
//!
//! Data model shared by the tree validator and the variety analyzer.
//!
//! # Overview
//!
//! - **Value**: closed recursive sum type for payload data, including the
//!   non-serializable runtime content a dynamic producer may leak
//! - **ComponentDescriptor**: typed component instance (id, type, payload,
//!   children, layout, styling)
//! - **NodePath**: dot/bracket location of a finding
//! - **TypeRegistry**: injected "is this type known?" capability
//! - **IdGenerator**: per-session kebab-case ID allocation
//! - **TextReport**: shared layout for human-readable result rendering
//!
//! # Example
//!
//! ```rust
//! use a2ui_protocol::{ComponentDescriptor, ComponentRegistry, IdGenerator, TypeRegistry};
//!
//! let registry = ComponentRegistry::with_defaults();
//! let mut ids = IdGenerator::new();
//!
//! let card = ComponentDescriptor::new(ids.next_id("a2ui.StatCard", None), "a2ui.StatCard")
//!     .with_prop("value", "$196B")
//!     .with_prop("label", "AI Market Size");
//!
//! assert_eq!(card.id, "stat-card-1");
//! assert!(registry.is_registered(&card.component_type));
//! ```

#![warn(missing_docs)]

pub mod descriptor;
pub mod id;
pub mod path;
pub mod registry;
pub mod report;
pub mod value;

// Re-exports
pub use descriptor::{ComponentDescriptor, Typed};
pub use id::IdGenerator;
pub use path::{NodePath, PathError, Segment};
pub use registry::{ComponentRegistry, FnRegistry, TypeRegistry, DEFAULT_COMPONENT_TYPES};
pub use report::{ReportOptions, TextReport};
pub use value::{Map, NonSerializable, Value};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for protocol types
    pub use crate::{
        ComponentDescriptor, ComponentRegistry, IdGenerator, Map, NodePath, TypeRegistry, Typed,
        Value,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

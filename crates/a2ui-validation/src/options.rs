//! Validation options

use serde::{Deserialize, Serialize};

/// Default bound on tree depth (root is depth 0)
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Settings recognised by the tree validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Verify each type against the registry
    pub check_registration: bool,
    /// Deepest allowed depth
    pub max_depth: usize,
    /// Report unregistered types as warnings instead of errors
    pub allow_unregistered: bool,
    /// Detect descriptors that are their own ancestors
    pub check_circular: bool,
    /// Require the registry's declared props in each payload
    pub check_required_props: bool,
    /// Namespace every type name must use, e.g. `a2ui`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_namespace: Option<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_registration: true,
            max_depth: DEFAULT_MAX_DEPTH,
            allow_unregistered: false,
            check_circular: true,
            check_required_props: false,
            type_namespace: None,
        }
    }
}

impl ValidationOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With registration check toggled
    #[inline]
    #[must_use]
    pub fn with_registration_check(mut self, enabled: bool) -> Self {
        self.check_registration = enabled;
        self
    }

    /// With unregistered types demoted to warnings
    #[inline]
    #[must_use]
    pub fn allowing_unregistered(mut self) -> Self {
        self.allow_unregistered = true;
        self
    }

    /// With cycle detection toggled
    #[inline]
    #[must_use]
    pub fn with_circular_check(mut self, enabled: bool) -> Self {
        self.check_circular = enabled;
        self
    }

    /// With required-prop enforcement toggled
    #[inline]
    #[must_use]
    pub fn with_required_props(mut self, enabled: bool) -> Self {
        self.check_required_props = enabled;
        self
    }

    /// With mandatory type namespace
    #[inline]
    #[must_use]
    pub fn with_type_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.type_namespace = Some(namespace.into());
        self
    }
}

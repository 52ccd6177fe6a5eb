//! Gate configuration
//!
//! One TOML document configures both analyses and the merge policy:
//!
//! ```toml
//! [validation]
//! max_depth = 6
//! check_required_props = true
//!
//! [variety]
//! min_unique_types = 3
//!
//! [gate]
//! policy = "strict"
//! ```
//!
//! Every field has a default, so an empty document is a valid config.

use crate::error::ConfigError;
use crate::gate::GatePolicy;
use a2ui_validation::ValidationOptions;
use a2ui_variety::VarietyRules;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete gate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Tree validator settings
    pub validation: ValidationOptions,
    /// Diversity thresholds
    pub variety: VarietyRules,
    /// Merge settings
    pub gate: GateSettings,
}

/// `[gate]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSettings {
    /// How findings turn into a verdict
    pub policy: GatePolicy,
}

impl GateConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With validation options
    #[inline]
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    /// With variety rules
    #[inline]
    #[must_use]
    pub fn with_variety(mut self, variety: VarietyRules) -> Self {
        self.variety = variety;
        self
    }

    /// With merge policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.gate.policy = policy;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), policy = %config.gate.policy, "loaded gate config");
        Ok(config)
    }

    /// Render as TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Serialize`] if TOML encoding fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

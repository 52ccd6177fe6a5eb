//! Validation findings
//!
//! Every data-shape problem the validator meets becomes an [`Issue`] carrying
//! a machine-readable [`IssueKind`] and the [`NodePath`] of the offending
//! node. Whether an issue is an error or a warning is decided by where the
//! validator files it, not by its kind.

use a2ui_protocol::NodePath;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Machine-readable finding classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// `id`, `type` or `payload` absent, empty, or of the wrong primitive type
    MissingRequiredField,
    /// Type name does not follow the `<namespace>.<Name>` convention (warning)
    InvalidType,
    /// Type name unknown to the registry
    UnregisteredType,
    /// Payload is not a mapping, or lacks a required prop
    InvalidProps,
    /// Payload entry holds executable, absent or opaque content
    NonSerializableProp,
    /// Descriptor appears among its own ancestors
    CircularReference,
    /// `children` is not an array, or the tree is too deep
    InvalidChildren,
    /// Identity already used elsewhere in the same pass
    DuplicateKey,
    /// `layout` is not a mapping or has an unknown `position`
    InvalidLayout,
    /// `styling` is not a mapping
    InvalidStyling,
}

impl IssueKind {
    /// All kinds, in declaration order
    pub const ALL: [IssueKind; 10] = [
        Self::MissingRequiredField,
        Self::InvalidType,
        Self::UnregisteredType,
        Self::InvalidProps,
        Self::NonSerializableProp,
        Self::CircularReference,
        Self::InvalidChildren,
        Self::DuplicateKey,
        Self::InvalidLayout,
        Self::InvalidStyling,
    ];

    /// Stable wire code, e.g. `DUPLICATE_KEY`
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::InvalidType => "INVALID_TYPE",
            Self::UnregisteredType => "UNREGISTERED_TYPE",
            Self::InvalidProps => "INVALID_PROPS",
            Self::NonSerializableProp => "NON_SERIALIZABLE_PROP",
            Self::CircularReference => "CIRCULAR_REFERENCE",
            Self::InvalidChildren => "INVALID_CHILDREN",
            Self::DuplicateKey => "DUPLICATE_KEY",
            Self::InvalidLayout => "INVALID_LAYOUT",
            Self::InvalidStyling => "INVALID_STYLING",
        }
    }
}

impl Display for IssueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Finding class
    pub kind: IssueKind,
    /// Human-readable description
    pub message: String,
    /// Location of the offending node or value
    pub path: NodePath,
}

impl Issue {
    /// Create issue
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>, path: NodePath) -> Self {
        Self {
            kind,
            message: message.into(),
            path,
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.path, self.message)
    }
}

//! Error types for the dashboard gate
//!
//! Data problems in a dashboard are findings, never errors. The errors here
//! cover configuration loading and calling-convention mistakes.

use a2ui_validation::ContractError;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written back as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Policy name not recognised
    #[error("unknown gate policy '{0}' (expected strict, advisory or permissive)")]
    UnknownPolicy(String),
}

/// Gate errors
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Input was not a list of components
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for gate operations
pub type GateResult<T> = Result<T, GateError>;

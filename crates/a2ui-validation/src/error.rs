//! Calling-convention errors
//!
//! Malformed descriptor data never produces an error; it produces issues in
//! the [`ValidationResult`](crate::ValidationResult). The only failure the
//! validator raises is being handed the wrong container shape.

/// Misuse of a validator entry point
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Batch entry point given something other than an array
    #[error("expected an array of component descriptors, got {found}")]
    ExpectedArray {
        /// Kind of value that was supplied
        found: &'static str,
    },
}

/// Result alias for validator entry points that can fail
pub type ContractResult<T> = Result<T, ContractError>;

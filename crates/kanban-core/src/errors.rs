//! Cross-cutting error types for the Kanban store.
//!
//! Domain-specific errors (`DatabaseError`, `ConfigError`) are defined in
//! their respective crates and wrap `CoreError` where documents are decoded.

use thiserror::Error;

/// Errors raised while building or decoding task records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A document lacks one of the required record fields.
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// A document field is present but has the wrong shape.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// An enum-valued field holds a string outside its variant set.
    #[error("Invalid {field} value: '{value}'")]
    InvalidValue { field: String, value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

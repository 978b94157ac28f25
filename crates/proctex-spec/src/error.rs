//! Error types for document parsing and validation.

use thiserror::Error;

/// Errors from texture document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's `custom_type` tag is not registered.
    #[error("unknown custom type: {0}")]
    UnknownCustomType(String),

    /// The document's tag names a different variant than the parser expects.
    #[error("custom type mismatch: expected {expected}, got {actual}")]
    CustomTypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// A base field failed validation.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

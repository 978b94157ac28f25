//! Error types for the texture runtime.

use thiserror::Error;

use crate::png::PngError;
use proctex_spec::DocumentError;

/// Errors from procedural texture operations.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Document serialization or parsing error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// A fragment program read a uniform that was never uploaded.
    #[error("missing uniform: {0}")]
    MissingUniform(String),

    /// A fragment program read a uniform with the wrong type.
    #[error("uniform {name} is {actual}, expected {expected}")]
    UniformType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// PNG encoding error.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

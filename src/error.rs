//! Error types for rendering and validating template components

use thiserror::Error;

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or validating a component
#[derive(Debug, Error)]
pub enum Error {
    /// One or more fields are missing or hold a value outside the allowed set.
    ///
    /// Every violation found by a single `validate` call is reported together.
    #[error("invalid {kind}: {}", fields.join(", "))]
    Validation {
        kind: &'static str,
        fields: Vec<String>,
    },

    /// A raw JSON string could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generic value could not be converted to JSON
    #[error("cannot encode {kind}: {message}")]
    Encode { kind: &'static str, message: String },
}

impl Error {
    /// Names of the fields reported by a validation error
    pub fn fields(&self) -> &[String] {
        match self {
            Error::Validation { fields, .. } => fields,
            _ => &[],
        }
    }
}

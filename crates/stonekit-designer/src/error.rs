//! Error types for the designer.
//!
//! Editor operations fail synchronously and all-or-nothing: when one of
//! these is returned the design state has not been touched and no undo
//! snapshot was pushed.

use stonekit_core::ValidationError;
use thiserror::Error;

/// Errors raised by design-canvas operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// Input rejected (empty text, dimension that is not a positive number,
    /// texture not offered for the current object, ...)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Uploaded data is not a decodable image
    #[error("Invalid image format: {0}")]
    InvalidImageFormat(String),
}

impl DesignerError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignerError::Validation(ValidationError::new(field, reason))
    }
}

impl From<DesignerError> for stonekit_core::Error {
    fn from(err: DesignerError) -> Self {
        match err {
            DesignerError::Validation(v) => stonekit_core::Error::Validation(v),
            other => stonekit_core::Error::other(other.to_string()),
        }
    }
}

pub type DesignerResult<T> = Result<T, DesignerError>;

//! Error handling for StoneKit
//!
//! Provides the shared error type used across crates that do not need a
//! richer domain error of their own. Domain crates (the designer, settings)
//! define their own `thiserror` enums and convert into this one at the
//! application boundary.

use thiserror::Error;

/// Input validation error
///
/// Raised when a caller supplies a value the editor refuses to store.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    /// The field or argument that failed validation.
    pub field: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for StoneKit
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("width", "must be finite");
        assert_eq!(err.to_string(), "Invalid width: must be finite");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ValidationError::new("text", "must not be empty").into();
        assert!(err.is_validation_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(!err.is_validation_error());
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_other() {
        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}

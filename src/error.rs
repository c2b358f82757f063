//! Error types for the contact manager.
//!
//! This module defines crate-level error types using `thiserror`. Field
//! validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped here so every fallible operation shares one error type.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when adding or importing contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A contact field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to read a contacts file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV row
    #[error("CSV error on line {line}: {reason}")]
    Csv { line: usize, reason: String },

    /// Failed to render contacts as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactError {
    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(e) => Some(*e),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::from(ValidationError::LastNameBlank);
        assert_eq!(err.to_string(), "Last Name Cannot be Null or Empty");

        let err = ContactError::Csv {
            line: 3,
            reason: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CSV error on line 3: expected 3 fields, found 2"
        );

        let err = ConfigError::InvalidValue {
            var: "CONTACTS_IMPORT_MODE".to_string(),
            reason: "expected 'strict' or 'lenient', got: x".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid value for CONTACTS_IMPORT_MODE"));
    }

    #[test]
    fn test_as_validation() {
        let err = ContactError::from(ValidationError::PhoneNumberPrefix);
        assert_eq!(err.as_validation(), Some(ValidationError::PhoneNumberPrefix));

        let err = ContactError::Csv {
            line: 1,
            reason: "empty".to_string(),
        };
        assert_eq!(err.as_validation(), None);
    }
}

//! Errors raised by the form domain layer

use thiserror::Error;

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;

/// Form errors
///
/// Validation failures are not errors: they come back from
/// [`FormController::submit`](super::FormController::submit) as a rejected
/// outcome. Everything here is a mistake in the form definition or in the
/// caller.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Select field has no options: {0}")]
    MissingOptions(String),

    #[error("Invalid pattern for field {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid form definition: {0}")]
    Definition(#[from] serde_json::Error),

    #[error("Failed to read form definition: {0}")]
    Io(#[from] std::io::Error),
}

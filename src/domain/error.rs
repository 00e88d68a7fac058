//! Domain-level errors (no I/O concerns)

use thiserror::Error;

/// Domain errors are raised when JSON input does not fit the value shapes.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("null is not a supported value here")]
    UnsupportedNull,

    #[error("expected a primitive value, found {0}")]
    NotPrimitive(&'static str),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("number not representable: {0}")]
    InvalidNumber(String),
}

/// Result type for domain conversions.
pub type DomainResult<T> = Result<T, DomainError>;

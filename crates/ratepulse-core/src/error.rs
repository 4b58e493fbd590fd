use thiserror::Error;

/// Validation errors exposed by `ratepulse-core` domain constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("country identifier cannot be empty")]
    EmptyCountry,

    #[error("rate effective date cannot be empty")]
    EmptyDate,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

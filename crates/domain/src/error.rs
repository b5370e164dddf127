//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The price is negative.
    #[error("price must not be negative: {0}")]
    NegativePrice(f64),

    /// The price is NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,

    /// An item identifier is invalid.
    #[error("invalid item id: {0}")]
    InvalidId(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

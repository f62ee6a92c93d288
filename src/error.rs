//! Error types for pricing and arithmetic dispatch

use thiserror::Error;

/// Validation failures raised by the pricing pipeline
///
/// Malformed input fails here before any arithmetic runs; the pipeline never
/// produces a total from nonsensical values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Price is non-finite, non-positive, or exceeds the allowed maximum
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Quantity is non-positive or exceeds the allowed maximum
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Category tag is missing or empty
    #[error("invalid category: {0}")]
    InvalidCategory(String),
}

/// Arithmetic dispatch failures
///
/// Both are fatal to the call and surfaced synchronously; there are no
/// partial results and nothing to retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Operation name does not resolve against the fixed table
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// DIVIDE called with a zero divisor
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

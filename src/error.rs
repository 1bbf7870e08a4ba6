//! Error type for the checked construction paths.
//!
//! Infeasibility is never an error: it is reported through
//! [`PUNISHMENT`](crate::knapsack::PUNISHMENT). Only malformed instance data
//! and invalid configuration surface here.

use thiserror::Error;

/// Errors raised when building instances or validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Value and weight tables are not index-aligned.
    #[error("value/weight length mismatch: {values} values, {weights} weights")]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// The knapsack capacity is negative.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// An item weight is zero or negative.
    #[error("weight of item {index} must be positive, got {weight}")]
    NonPositiveWeight {
        /// Item index.
        index: usize,
        /// Offending weight.
        weight: i64,
    },

    /// A construction parameter is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

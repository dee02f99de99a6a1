//! Errors raised by the knapsack input layer.
//!
//! Every variant is detected before the table is allocated. Once the
//! recurrence starts it cannot fail, so there is no runtime error path
//! inside [`TableEngine`](crate::engine::TableEngine).

use thiserror::Error;

pub type KnapsackResult<T> = Result<T, KnapsackError>;

/// Rejected knapsack input.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum KnapsackError {
    /// Weights and values do not describe the same number of items.
    #[error("invalid input: {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("invalid input: capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    #[error("invalid input: item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("invalid input: item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    /// The (rows x cols) table exceeds `isize::MAX` bytes or the allocator
    /// refused it.
    #[error("invalid input: a {rows} x {cols} table does not fit in memory")]
    TableTooLarge { rows: usize, cols: usize },

    /// The sum of all item values exceeds `u64`, so a table cell could overflow.
    #[error("invalid input: total item value overflows u64")]
    ValueOverflow,
}

impl KnapsackError {
    /// Every variant is an invalid-input rejection; this groups them under
    /// that single class for callers that do not care which check failed.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            KnapsackError::LengthMismatch { .. }
            | KnapsackError::NegativeCapacity(_)
            | KnapsackError::NegativeWeight { .. }
            | KnapsackError::NegativeValue { .. }
            | KnapsackError::TableTooLarge { .. }
            | KnapsackError::ValueOverflow => true,
        }
    }
}

//! Reasons a raw denomination list can be rejected.

use thiserror::Error;

/// A single problem found in a denomination list.
///
/// Indices refer to the position in the list as supplied by the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DenominationViolation {
    #[error("No denominations supplied")]
    Empty,

    #[error("Denomination at index {index} must be positive (got {value})")]
    NonPositive { index: usize, value: i128 },

    #[error("Denomination {value} at index {index} repeats the previous entry")]
    Duplicate { index: usize, value: i128 },

    #[error("Denomination {value} at index {index} is larger than the previous entry {previous}")]
    NotDescending {
        index: usize,
        previous: i128,
        value: i128,
    },
}

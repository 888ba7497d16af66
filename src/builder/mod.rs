//! Builder API for ergonomic denomination set construction.
//!
//! This module provides a fluent builder and the `denominations!` macro
//! for creating validated denomination sets with minimal boilerplate.

pub mod macros;
pub mod set;

pub use set::DenominationSetBuilder;

use crate::core::DenominationSet;
use crate::error::DispenseError;

/// Build a set from note values given in any order.
///
/// Unlike the builder, this sorts the values largest first before
/// validating, so only non-positive values and duplicates are rejected.
///
/// # Example
///
/// ```
/// use dispenser::builder::sorted_set;
///
/// let set = sorted_set([100, 2000, 500]).unwrap();
/// assert_eq!(set.as_values(), vec![2000, 500, 100]);
///
/// assert!(sorted_set([100, 100]).is_err());
/// ```
pub fn sorted_set<I>(values: I) -> Result<DenominationSet, DispenseError>
where
    I: IntoIterator<Item = u64>,
{
    let mut values: Vec<u64> = values.into_iter().collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    DenominationSetBuilder::new().notes(values).build()
}

//! Banknote denominations and validated denomination sets.
//!
//! A `DenominationSet` can only be obtained through validation, so every
//! value of the type is non-empty, strictly descending and free of
//! duplicates. Code that receives one never has to re-check it.

use crate::error::DispenseError;
use crate::validation::{into_result, validate_denominations, DenominationViolation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// A single positive banknote value.
///
/// # Example
///
/// ```rust
/// use dispenser::core::Denomination;
///
/// let note = Denomination::new(500).unwrap();
/// assert_eq!(note.value(), 500);
/// assert!(Denomination::new(0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denomination(NonZeroU64);

impl Denomination {
    /// Create a denomination. Returns `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// The face value of the note.
    pub fn value(self) -> u64 {
        self.0.get()
    }
}

const fn note(value: u64) -> Denomination {
    match NonZeroU64::new(value) {
        Some(value) => Denomination(value),
        None => panic!("note value must be non-zero"),
    }
}

const STANDARD_NOTES: [Denomination; 3] = [note(2000), note(500), note(100)];

fn non_positive(index: usize, value: impl Into<i128>) -> DispenseError {
    DispenseError::InvalidDenominations(vec![DenominationViolation::NonPositive {
        index,
        value: value.into(),
    }])
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of denominations, largest first.
///
/// Serialized as a plain array of integers. Deserializing an array that
/// violates the ordering rules fails.
///
/// # Example
///
/// ```rust
/// use dispenser::core::DenominationSet;
///
/// let set = DenominationSet::new(vec![2000, 500, 100]).unwrap();
/// assert_eq!(set.largest().value(), 2000);
/// assert_eq!(set.smallest().value(), 100);
///
/// // Ascending input is a programming error, not something to sort quietly
/// assert!(DenominationSet::new(vec![100, 500]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct DenominationSet {
    denominations: Vec<Denomination>,
}

impl DenominationSet {
    /// Validate and build a set from note values.
    pub fn new(values: Vec<u64>) -> Result<Self, DispenseError> {
        into_result(validate_denominations(values.as_slice()))?;

        let denominations = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Denomination::new(value).ok_or_else(|| non_positive(index, value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { denominations })
    }

    /// Validate and build a set from untrusted signed input.
    ///
    /// Negative and zero values are reported as violations instead of
    /// being wrapped or truncated.
    pub fn from_raw(values: &[i64]) -> Result<Self, DispenseError> {
        into_result(validate_denominations(values))?;

        let denominations = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u64::try_from(value)
                    .ok()
                    .and_then(Denomination::new)
                    .ok_or_else(|| non_positive(index, value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { denominations })
    }

    /// The 2000 / 500 / 100 set used by the classic ATM exercise.
    pub fn standard() -> Self {
        Self {
            denominations: STANDARD_NOTES.to_vec(),
        }
    }

    /// Largest note in the set.
    pub fn largest(&self) -> Denomination {
        self.denominations[0]
    }

    /// Smallest note in the set. Any leftover is strictly below this.
    pub fn smallest(&self) -> Denomination {
        self.denominations[self.denominations.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    /// Iterate in descending order.
    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.denominations.iter().copied()
    }

    pub fn contains(&self, value: u64) -> bool {
        self.denominations.iter().any(|d| d.value() == value)
    }

    /// Raw note values in descending order.
    pub fn as_values(&self) -> Vec<u64> {
        self.iter().map(Denomination::value).collect()
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<u64>> for DenominationSet {
    type Error = DispenseError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<DenominationSet> for Vec<u64> {
    fn from(set: DenominationSet) -> Self {
        set.as_values()
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

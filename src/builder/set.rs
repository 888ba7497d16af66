//! Builder for constructing denomination sets.

use crate::core::DenominationSet;
use crate::error::DispenseError;

/// Builder for denomination sets with a fluent API.
///
/// Notes are kept in insertion order. `build()` validates them and fails
/// on an unordered list instead of sorting it.
#[derive(Clone, Debug, Default)]
pub struct DenominationSetBuilder {
    notes: Vec<u64>,
}

impl DenominationSetBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Add one note value.
    pub fn note(mut self, value: u64) -> Self {
        self.notes.push(value);
        self
    }

    /// Add several note values at once.
    pub fn notes<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.notes.extend(values);
        self
    }

    /// Build the set.
    /// Returns an error listing every violation if the notes are invalid.
    pub fn build(self) -> Result<DenominationSet, DispenseError> {
        DenominationSet::new(self.notes)
    }
}

//! The outcome of a single withdrawal request.
//!
//! Plans are immutable values: they are built fresh for each request,
//! carry no identity, and are discarded once reported.

use super::denomination::Denomination;
use crate::error::PlanError;
use serde::{Deserialize, Serialize};

/// A run of identical notes handed out together.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NoteBundle {
    /// The note being dispensed
    pub denomination: Denomination,
    /// How many notes of it (always at least one)
    pub count: u64,
}

impl NoteBundle {
    /// Total value covered by this bundle.
    pub fn total(&self) -> u64 {
        self.denomination.value() * self.count
    }

    /// Total value, or `None` if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Option<u64> {
        self.denomination.value().checked_mul(self.count)
    }
}

/// Greedy breakdown of a requested amount.
///
/// Bundles appear in descending denomination order. A plan with a
/// non-zero leftover is a normal outcome, not an error: the caller checks
/// [`is_satisfied`](Self::is_satisfied) and decides how to report it.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{dispense, DenominationSet};
///
/// let plan = dispense(3750, &DenominationSet::standard());
///
/// assert!(!plan.is_satisfied());
/// assert_eq!(plan.leftover(), 50);
/// assert_eq!(plan.dispensed_total(), 3700);
/// assert_eq!(plan.dispensed_total() + plan.leftover(), plan.requested());
/// ```
///
/// Deserialization re-checks the plan: every bundle holds at least one
/// note, bundles are strictly descending, and the bundles plus the
/// leftover add up to the requested amount.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawDispensePlan")]
pub struct DispensePlan {
    requested: u64,
    bundles: Vec<NoteBundle>,
    leftover: u64,
}

/// Unchecked wire form of a plan.
#[derive(Deserialize)]
struct RawDispensePlan {
    requested: u64,
    bundles: Vec<NoteBundle>,
    leftover: u64,
}

impl TryFrom<RawDispensePlan> for DispensePlan {
    type Error = PlanError;

    fn try_from(raw: RawDispensePlan) -> Result<Self, Self::Error> {
        let mut accounted = raw.leftover;

        for (index, bundle) in raw.bundles.iter().enumerate() {
            if bundle.count == 0 {
                return Err(PlanError::EmptyBundle {
                    index,
                    denomination: bundle.denomination.value(),
                });
            }

            if let Some(previous) = index.checked_sub(1).map(|i| raw.bundles[i]) {
                if bundle.denomination >= previous.denomination {
                    return Err(PlanError::NotDescending {
                        index,
                        previous: previous.denomination.value(),
                        denomination: bundle.denomination.value(),
                    });
                }
            }

            accounted = bundle
                .checked_total()
                .and_then(|total| accounted.checked_add(total))
                .ok_or(PlanError::Overflow { index })?;
        }

        if accounted != raw.requested {
            return Err(PlanError::SumMismatch {
                requested: raw.requested,
                accounted,
            });
        }

        Ok(Self::new(raw.requested, raw.bundles, raw.leftover))
    }
}

impl DispensePlan {
    pub(crate) fn new(requested: u64, bundles: Vec<NoteBundle>, leftover: u64) -> Self {
        Self {
            requested,
            bundles,
            leftover,
        }
    }

    /// The amount the caller asked for.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Bundles in descending denomination order.
    pub fn bundles(&self) -> &[NoteBundle] {
        &self.bundles
    }

    /// Amount that could not be covered by any note.
    pub fn leftover(&self) -> u64 {
        self.leftover
    }

    /// `true` when the whole amount was covered.
    pub fn is_satisfied(&self) -> bool {
        self.leftover == 0
    }

    /// Sum of the notes in the plan.
    pub fn dispensed_total(&self) -> u64 {
        self.bundles.iter().map(NoteBundle::total).sum()
    }

    /// Number of physical notes in the plan.
    pub fn note_count(&self) -> u64 {
        self.bundles.iter().map(|b| b.count).sum()
    }

    /// Notes of a given value in the plan, zero when it was not used.
    pub fn count_of(&self, value: u64) -> u64 {
        self.bundles
            .iter()
            .find(|b| b.denomination.value() == value)
            .map_or(0, |b| b.count)
    }

    /// Walk the bundles together with the amount still owed after each one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dispenser::core::{dispense, DenominationSet};
    ///
    /// let plan = dispense(3700, &DenominationSet::standard());
    /// let remaining: Vec<u64> = plan.steps().map(|(_, rest)| rest).collect();
    ///
    /// assert_eq!(remaining, vec![1700, 200, 0]);
    /// ```
    pub fn steps(&self) -> impl Iterator<Item = (&NoteBundle, u64)> + '_ {
        self.bundles
            .iter()
            .scan(self.requested, |remaining, bundle| {
                *remaining -= bundle.total();
                Some((bundle, *remaining))
            })
    }
}

//! Configured dispenser that performs checked withdrawals.
//!
//! The `Dispenser` is the imperative shell around the pure `core`: it owns
//! a denomination set, validates raw requests, and logs each outcome with
//! `tracing`. It keeps no state between calls.

use crate::core::{dispense, DenominationSet, DispensePlan};
use crate::error::DispenseError;
use crate::validation::validate_amount;
use tracing::{debug, warn};

/// Dispenser loaded with a fixed set of denominations.
///
/// # Example
///
/// ```rust
/// use dispenser::Dispenser;
///
/// let atm = Dispenser::standard();
///
/// let plan = atm.withdraw(3800).unwrap();
/// assert!(plan.is_satisfied());
///
/// let plan = atm.withdraw(3850).unwrap();
/// assert_eq!(plan.leftover(), 50);
///
/// assert!(atm.withdraw(-100).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Dispenser {
    denominations: DenominationSet,
}

impl Dispenser {
    /// Create a dispenser for the given denominations.
    pub fn new(denominations: DenominationSet) -> Self {
        Self { denominations }
    }

    /// Dispenser with the 2000 / 500 / 100 notes.
    pub fn standard() -> Self {
        Self::new(DenominationSet::standard())
    }

    /// The denominations this dispenser hands out, largest first.
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Compute the plan for an already non-negative amount.
    pub fn dispense(&self, amount: u64) -> DispensePlan {
        let plan = dispense(amount, &self.denominations);

        if plan.is_satisfied() {
            debug!(
                amount,
                notes = plan.note_count(),
                bundles = plan.bundles().len(),
                "Amount fully dispensed"
            );
        } else {
            warn!(
                amount,
                dispensed = plan.dispensed_total(),
                leftover = plan.leftover(),
                "Amount cannot be fully dispensed in available denominations"
            );
        }

        plan
    }

    /// Validate a raw amount and compute its plan.
    ///
    /// Negative amounts are rejected before anything is computed. An
    /// amount that only partially fits is still `Ok`; check
    /// `DispensePlan::is_satisfied`.
    pub fn withdraw(&self, amount: i64) -> Result<DispensePlan, DispenseError> {
        let amount = validate_amount(amount).map_err(|err| {
            warn!(error = %err, "Rejected withdrawal request");
            err
        })?;

        Ok(self.dispense(amount))
    }

    /// Whether `amount` can be covered exactly with these notes.
    pub fn can_dispense(&self, amount: u64) -> bool {
        dispense(amount, &self.denominations).is_satisfied()
    }
}

impl From<DenominationSet> for Dispenser {
    fn from(denominations: DenominationSet) -> Self {
        Self::new(denominations)
    }
}

/// Dispense from fully untrusted input.
///
/// Both the amount and the denomination list are validated before any
/// computation; every denomination problem is reported together.
///
/// # Example
///
/// ```rust
/// use dispenser::try_dispense;
///
/// let plan = try_dispense(3700, &[2000, 500, 100]).unwrap();
/// assert!(plan.is_satisfied());
///
/// assert!(try_dispense(-1, &[2000, 500, 100]).is_err());
/// assert!(try_dispense(3700, &[100, 500]).is_err());
/// ```
pub fn try_dispense(amount: i64, denominations: &[i64]) -> Result<DispensePlan, DispenseError> {
    let amount = validate_amount(amount).map_err(|err| {
        warn!(error = %err, "Rejected withdrawal request");
        err
    })?;
    let set = DenominationSet::from_raw(denominations).map_err(|err| {
        warn!(error = %err, "Rejected denomination set");
        err
    })?;

    Ok(Dispenser::new(set).dispense(amount))
}

//! Human-readable rendering of dispense plans.
//!
//! Rendering is kept out of `core`: the plan is plain data and this
//! module decides how it reads on a console or a receipt.

use crate::core::{DispensePlan, NoteBundle};
use std::fmt;

/// Message shown when some part of the amount could not be covered.
pub const UNDISPENSABLE_MESSAGE: &str =
    "Amount cannot be fully dispensed in available denominations.";

/// Message shown for an empty, satisfied plan.
pub const NOTHING_TO_DISPENSE: &str = "Nothing to dispense";

/// Console rendering of a [`DispensePlan`].
///
/// # Example
///
/// ```rust
/// use dispenser::core::{dispense, DenominationSet};
/// use dispenser::report::DispenseReport;
///
/// let plan = dispense(3750, &DenominationSet::standard());
/// let report = DispenseReport::new(&plan);
///
/// assert_eq!(
///     report.lines(),
///     vec![
///         "Dispense 1 note of 2000 (Remaining: 1750)",
///         "Dispense 3 notes of 500 (Remaining: 250)",
///         "Dispense 2 notes of 100 (Remaining: 50)",
///         "Amount cannot be fully dispensed in available denominations. (Remaining: 50)",
///     ]
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DispenseReport<'a> {
    plan: &'a DispensePlan,
}

impl<'a> DispenseReport<'a> {
    pub fn new(plan: &'a DispensePlan) -> Self {
        Self { plan }
    }

    /// One line per bundle, followed by the shortfall line if any.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .plan
            .steps()
            .map(|(bundle, remaining)| bundle_line(bundle, remaining))
            .collect();

        if !self.plan.is_satisfied() {
            lines.push(format!(
                "{} (Remaining: {})",
                UNDISPENSABLE_MESSAGE,
                self.plan.leftover()
            ));
        } else if lines.is_empty() {
            lines.push(NOTHING_TO_DISPENSE.to_string());
        }

        lines
    }
}

fn bundle_line(bundle: &NoteBundle, remaining: u64) -> String {
    let noun = if bundle.count == 1 { "note" } else { "notes" };
    format!(
        "Dispense {} {} of {} (Remaining: {})",
        bundle.count, noun, bundle.denomination, remaining
    )
}

impl fmt::Display for DispenseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

impl DispensePlan {
    /// Borrow this plan as a printable report.
    pub fn report(&self) -> DispenseReport<'_> {
        DispenseReport::new(self)
    }
}

//! Greedy decomposition of an amount into banknotes.

use super::denomination::DenominationSet;
use super::plan::{DispensePlan, NoteBundle};

/// Break `amount` into notes, taking as many of each denomination as fit
/// before moving on to the next smaller one.
///
/// This is a pure function. It never backtracks, so a set such as
/// {2000, 500, 100} leaves 50 over for 3750 and reports the plan as
/// unsatisfied rather than failing.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{dispense, DenominationSet};
///
/// let plan = dispense(3700, &DenominationSet::standard());
///
/// assert!(plan.is_satisfied());
/// assert_eq!(plan.count_of(2000), 1);
/// assert_eq!(plan.count_of(500), 3);
/// assert_eq!(plan.count_of(100), 2);
/// ```
pub fn dispense(amount: u64, denominations: &DenominationSet) -> DispensePlan {
    let mut remaining = amount;
    let mut bundles = Vec::new();

    for denomination in denominations.iter() {
        let value = denomination.value();
        let count = remaining / value;
        if count > 0 {
            bundles.push(NoteBundle {
                denomination,
                count,
            });
        }
        remaining %= value;
    }

    DispensePlan::new(amount, bundles, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(plan: &DispensePlan) -> Vec<(u64, u64)> {
        plan.bundles()
            .iter()
            .map(|b| (b.denomination.value(), b.count))
            .collect()
    }

    #[test]
    fn zero_amount_yields_empty_satisfied_plan() {
        let plan = dispense(0, &DenominationSet::standard());

        assert!(plan.bundles().is_empty());
        assert_eq!(plan.leftover(), 0);
        assert!(plan.is_satisfied());
    }

    #[test]
    fn exact_amount_3700() {
        let plan = dispense(3700, &DenominationSet::standard());

        assert_eq!(breakdown(&plan), vec![(2000, 1), (500, 3), (100, 2)]);
        assert_eq!(plan.leftover(), 0);
        assert!(plan.is_satisfied());
    }

    #[test]
    fn exact_amount_3800() {
        let plan = dispense(3800, &DenominationSet::standard());

        assert_eq!(breakdown(&plan), vec![(2000, 1), (500, 3), (100, 3)]);
        assert!(plan.is_satisfied());
    }

    #[test]
    fn residual_amount_3750_is_unsatisfied() {
        let plan = dispense(3750, &DenominationSet::standard());

        assert_eq!(breakdown(&plan), vec![(2000, 1), (500, 3), (100, 2)]);
        assert_eq!(plan.leftover(), 50);
        assert!(!plan.is_satisfied());
    }

    #[test]
    fn amount_below_smallest_note_dispenses_nothing() {
        let plan = dispense(50, &DenominationSet::standard());

        assert!(plan.bundles().is_empty());
        assert_eq!(plan.leftover(), 50);
        assert!(!plan.is_satisfied());
    }

    #[test]
    fn unused_denominations_are_skipped() {
        let plan = dispense(4100, &DenominationSet::standard());

        assert_eq!(breakdown(&plan), vec![(2000, 2), (100, 1)]);
    }

    #[test]
    fn greedy_does_not_backtrack() {
        // 6 = 3 + 3 exists, but greedy takes a 4 first and is left with 2
        let set = DenominationSet::new(vec![4, 3]).unwrap();
        let plan = dispense(6, &set);

        assert_eq!(breakdown(&plan), vec![(4, 1)]);
        assert_eq!(plan.leftover(), 2);
    }

    #[test]
    fn dispense_is_idempotent() {
        let set = DenominationSet::standard();
        assert_eq!(dispense(3850, &set), dispense(3850, &set));
    }
}

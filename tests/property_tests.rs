//! Property-based tests for greedy dispensing.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated amounts and denomination sets.

use dispenser::builder::sorted_set;
use dispenser::core::{dispense, DenominationSet, DispensePlan};
use dispenser::validation::validate_denominations;
use dispenser::{try_dispense, Dispenser};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_set()(values in prop::collection::btree_set(1..5_000u64, 1..6)) -> DenominationSet {
        // btree_set yields distinct ascending values
        let descending: Vec<u64> = values.into_iter().rev().collect();
        DenominationSet::new(descending).unwrap()
    }
}

prop_compose! {
    fn arbitrary_amount()(amount in 0..1_000_000u64) -> u64 {
        amount
    }
}

proptest! {
    #[test]
    fn weighted_sum_plus_leftover_equals_amount(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);
        prop_assert_eq!(plan.dispensed_total() + plan.leftover(), amount);
        prop_assert_eq!(plan.requested(), amount);
    }

    #[test]
    fn leftover_is_below_smallest_note(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);
        prop_assert!(plan.leftover() < set.smallest().value());
        prop_assert_eq!(plan.is_satisfied(), plan.leftover() == 0);
    }

    #[test]
    fn counts_are_greedy_maximal(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);
        let mut remaining = amount;

        for denomination in set.iter() {
            let expected = remaining / denomination.value();
            prop_assert_eq!(plan.count_of(denomination.value()), expected);
            remaining %= denomination.value();
        }

        prop_assert_eq!(remaining, plan.leftover());
    }

    #[test]
    fn bundles_are_descending_and_non_empty(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);

        for bundle in plan.bundles() {
            prop_assert!(bundle.count >= 1);
        }
        for pair in plan.bundles().windows(2) {
            prop_assert!(pair[0].denomination > pair[1].denomination);
        }
    }

    #[test]
    fn zero_amount_is_always_empty(set in arbitrary_set()) {
        let plan = dispense(0, &set);
        prop_assert!(plan.bundles().is_empty());
        prop_assert!(plan.is_satisfied());
    }

    #[test]
    fn dispense_is_idempotent(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        prop_assert_eq!(dispense(amount, &set), dispense(amount, &set));
    }

    #[test]
    fn steps_end_at_leftover(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);
        let last = plan.steps().last().map_or(amount, |(_, rest)| rest);
        prop_assert_eq!(last, plan.leftover());
    }

    #[test]
    fn unit_note_always_satisfies(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let mut values = set.as_values();
        if !values.contains(&1) {
            values.push(1);
        }
        let with_unit = DenominationSet::new(values).unwrap();
        prop_assert!(dispense(amount, &with_unit).is_satisfied());
    }

    #[test]
    fn negative_amounts_are_rejected(amount in i64::MIN..0) {
        prop_assert!(Dispenser::standard().withdraw(amount).is_err());
        prop_assert!(try_dispense(amount, &[2000, 500, 100]).is_err());
    }

    #[test]
    fn sorted_set_accepts_any_distinct_positive_values(
        values in prop::collection::hash_set(1..10_000u64, 1..8)
    ) {
        let set = sorted_set(values.iter().copied()).unwrap();
        prop_assert_eq!(set.len(), values.len());
        prop_assert!(validate_denominations(set.as_values().as_slice()).is_success());
    }

    #[test]
    fn dispensed_plans_survive_reload(
        amount in arbitrary_amount(),
        set in arbitrary_set()
    ) {
        let plan = dispense(amount, &set);
        let json = serde_json::to_string(&plan).unwrap();
        let reloaded: DispensePlan = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(plan, reloaded);
    }

    #[test]
    fn tampered_requested_amount_is_rejected(
        amount in arbitrary_amount(),
        set in arbitrary_set(),
        delta in 1..1_000u64
    ) {
        let plan = dispense(amount, &set);
        let mut value = serde_json::to_value(&plan).unwrap();
        value["requested"] = serde_json::json!(amount + delta);
        prop_assert!(serde_json::from_value::<DispensePlan>(value).is_err());
    }

    #[test]
    fn set_roundtrip_serialization(set in arbitrary_set()) {
        let json = serde_json::to_string(&set).unwrap();
        let deserialized: DenominationSet = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(set, deserialized);
    }
}

//! Validation rules for denomination lists and withdrawal amounts.

use crate::error::DispenseError;
use crate::validation::violations::DenominationViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a denomination list.
pub type DenominationCheck = Validation<(), NonEmptyVec<DenominationViolation>>;

/// Check a denomination list, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the list is non-empty, strictly
/// descending and entirely positive. Otherwise every offending entry is
/// reported, not just the first one.
///
/// # Example
///
/// ```rust
/// use dispenser::validation::{validate_denominations, DenominationViolation};
/// use stillwater::validation::Validation;
///
/// assert!(validate_denominations(&[2000_i64, 500, 100]).is_success());
///
/// match validate_denominations(&[0_i64, 500, 500]) {
///     Validation::Failure(violations) => assert_eq!(violations.len(), 3),
///     Validation::Success(_) => panic!("Expected violations"),
/// }
/// ```
pub fn validate_denominations<T>(values: &[T]) -> DenominationCheck
where
    T: Copy + Into<i128>,
{
    if values.is_empty() {
        return Validation::fail(DenominationViolation::Empty);
    }

    let values: Vec<i128> = values.iter().map(|v| (*v).into()).collect();
    let mut checks: Vec<DenominationCheck> = Vec::new();

    for (index, value) in values.iter().copied().enumerate() {
        checks.push(check_positive(index, value));
    }

    for (offset, pair) in values.windows(2).enumerate() {
        checks.push(check_descending(offset + 1, pair[0], pair[1]));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_positive(index: usize, value: i128) -> DenominationCheck {
    if value > 0 {
        Validation::success(())
    } else {
        Validation::fail(DenominationViolation::NonPositive { index, value })
    }
}

fn check_descending(index: usize, previous: i128, value: i128) -> DenominationCheck {
    if value < previous {
        Validation::success(())
    } else if value == previous {
        Validation::fail(DenominationViolation::Duplicate { index, value })
    } else {
        Validation::fail(DenominationViolation::NotDescending {
            index,
            previous,
            value,
        })
    }
}

/// Reject negative withdrawal amounts before any computation happens.
pub fn validate_amount(amount: i64) -> Result<u64, DispenseError> {
    u64::try_from(amount).map_err(|_| DispenseError::NegativeAmount { amount })
}

/// Collapse an accumulated check into a `Result`.
pub(crate) fn into_result(check: DenominationCheck) -> Result<(), DispenseError> {
    match check {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(DispenseError::InvalidDenominations(
            violations.iter().cloned().collect(),
        )),
    }
}

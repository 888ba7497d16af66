//! Errors raised before a withdrawal is computed, and when a stored
//! plan is loaded back.
//!
//! An amount that cannot be fully dispensed is NOT an error; it is
//! reported through `DispensePlan::is_satisfied`.

use crate::validation::DenominationViolation;
use thiserror::Error;

/// Caller programming errors detected before dispensing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispenseError {
    #[error("Withdrawal amount must not be negative (got {amount})")]
    NegativeAmount { amount: i64 },

    #[error("Invalid denomination set: {}", join_violations(.0))]
    InvalidDenominations(Vec<DenominationViolation>),
}

/// Reasons a stored plan is rejected when it is loaded back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Bundle {index} of note {denomination} holds no notes")]
    EmptyBundle { index: usize, denomination: u64 },

    #[error("Bundle {index} of note {denomination} does not follow the larger note {previous}")]
    NotDescending {
        index: usize,
        previous: u64,
        denomination: u64,
    },

    #[error("Bundle {index} overflows the plan total")]
    Overflow { index: usize },

    #[error("Plan bundles and leftover add up to {accounted}, not the requested {requested}")]
    SumMismatch { requested: u64, accounted: u64 },
}

fn join_violations(violations: &[DenominationViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

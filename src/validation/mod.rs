//! Validation of caller-supplied denominations and amounts.
//!
//! Denomination lists are checked with Stillwater's `Validation` type so
//! that ALL problems are reported in one pass instead of stopping at the
//! first one. A caller fixing a misconfigured ATM sees every bad entry
//! at once.
//!
//! # Example
//!
//! ```rust
//! use dispenser::validation::{validate_amount, validate_denominations};
//!
//! assert!(validate_denominations(&[2000_i64, 500, 100]).is_success());
//! assert!(validate_denominations(&[100_i64, 500]).is_failure());
//!
//! assert_eq!(validate_amount(3700).unwrap(), 3700);
//! assert!(validate_amount(-10).is_err());
//! ```

pub mod rules;
pub mod violations;

pub(crate) use rules::into_result;
pub use rules::{validate_amount, validate_denominations, DenominationCheck};
pub use violations::DenominationViolation;

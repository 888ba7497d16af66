//! Core dispensing types and logic.
//!
//! This module contains the pure core of the crate:
//! - Denominations and validated denomination sets
//! - The greedy `dispense` function
//! - Immutable dispense plans
//!
//! Nothing in this module logs or performs I/O.

mod denomination;
mod dispense;
mod plan;

pub use denomination::{Denomination, DenominationSet};
pub use dispense::dispense;
pub use plan::{DispensePlan, NoteBundle};

//! Dispenser: a pure greedy banknote dispensing library
//!
//! Dispenser follows a "pure core, imperative shell" layout. The core
//! decomposition of an amount into notes is a pure function over an
//! ordered denomination list; validation, logging, configuration and
//! rendering live around it.
//!
//! # Core Concepts
//!
//! - **DenominationSet**: validated, strictly descending note values
//! - **dispense**: greedy, single-pass decomposition of an amount
//! - **DispensePlan**: immutable breakdown plus any leftover
//!
//! An amount that cannot be fully covered is not an error. The plan
//! reports the leftover and the caller decides what to do with it.
//!
//! # Example
//!
//! ```rust
//! use dispenser::core::{dispense, DenominationSet};
//!
//! let plan = dispense(3700, &DenominationSet::standard());
//!
//! let breakdown: Vec<(u64, u64)> = plan
//!     .bundles()
//!     .iter()
//!     .map(|b| (b.denomination.value(), b.count))
//!     .collect();
//!
//! assert_eq!(breakdown, vec![(2000, 1), (500, 3), (100, 2)]);
//! assert!(plan.is_satisfied());
//!
//! println!("{}", plan.report());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod dispenser;
pub mod error;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{dispense, Denomination, DenominationSet, DispensePlan, NoteBundle};
pub use crate::dispenser::{try_dispense, Dispenser};
pub use crate::error::{DispenseError, PlanError};

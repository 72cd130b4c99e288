//! Strategy selection and the allocation entry points.
//!
//! [`allocate`] is the whole contract for most callers: pass read-only
//! candidate and slot-type slices, pick a [`Strategy`], get a
//! [`RunResult`](crate::models::RunResult). Runs share no state, so
//! independent cohorts may be allocated concurrently.

mod config;
mod runner;

pub use config::{AllocConfig, Strategy};
#[cfg(feature = "parallel")]
pub use runner::allocate_cohorts;
pub use runner::{allocate, allocate_with};

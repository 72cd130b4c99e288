//! Run summaries for dashboards and downstream reporting.
//!
//! Pure arithmetic over a finished [`RunResult`](crate::models::RunResult).
//! Ratios over empty sets are reported as zero.

mod demand;
mod summary;

pub use demand::{preference_demand, SlotDemand};
pub use summary::{RunSummary, SlotUtilization};

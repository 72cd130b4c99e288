//! Deterministic capacity-constrained assignment.
//!
//! Assigns candidates to capacity-limited slot types under eligibility
//! rules, returning commitments plus the candidates left over. Two
//! interchangeable strategies share one data model and one eligibility
//! predicate:
//!
//! - **Greedy**: merit-priority serial dictatorship. Candidates are
//!   visited strongest first and take their first eligible preference.
//! - **Stable**: capacity-constrained deferred acceptance. Candidates
//!   propose in preference order; slot types keep their strongest
//!   proposals and evict only for strictly higher merit.
//!
//! # Modules
//!
//! - **`models`**: `Candidate`, `SlotType`, `Commitment`, `RunResult`
//! - **`eligibility`**: the four-check predicate and explained verdicts
//! - **`ranking`**: rule composition for candidate ordering
//! - **`greedy`**, **`stable`**: the two strategies
//! - **`allocation`**: strategy selection and entry points
//! - **`validation`**: input integrity checks (duplicate ids, unknown preferences)
//! - **`report`**: placement statistics and preference demand
//!
//! # Quick start
//!
//! ```
//! use u_assign::allocation::{allocate, Strategy};
//! use u_assign::models::{Candidate, SlotType};
//!
//! let slots = vec![SlotType::new("c1", "Acme", 1)
//!     .with_min_merit(5.0)
//!     .with_allowed_categories(["X"])];
//! let cohort = vec![
//!     Candidate::new("a", "Ada", "X", 6.0).with_preferences(["c1"]),
//!     Candidate::new("b", "Bo", "X", 8.0).with_preferences(["c1"]),
//! ];
//!
//! let result = allocate(&cohort, &slots, Strategy::Stable);
//! assert_eq!(result.placed_ids(), vec!["b"]);
//! assert_eq!(result.displacements[0].evicted_id, "a");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on every model and report type
//! - `parallel`: `allocation::allocate_cohorts` on the rayon pool
//! - `wasm`: `wasm-bindgen` exports for browser front ends
//!
//! Runs are pure: no I/O, no global state, inputs borrowed read-only.
//! Log events are emitted through `tracing`; install a subscriber to see them.

pub mod allocation;
pub mod eligibility;
pub mod error;
pub mod greedy;
pub mod models;
pub mod ranking;
pub mod report;
pub mod stable;
pub mod validation;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use allocation::{allocate, Strategy};
pub use error::{AllocError, InputError};
pub use models::{Candidate, Commitment, RunResult, SlotType};

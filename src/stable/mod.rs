//! Capacity-constrained deferred acceptance (stable matching).
//!
//! Candidates propose down their preference lists. Each slot type holds
//! up to its capacity, always keeping its strongest proposals by merit:
//! a full slot type evicts its weakest holder only for a strictly
//! stronger proposer, so equal merit favors the incumbent. Evicted and
//! rejected candidates go back to the front of the worklist and carry on
//! from their next preference.
//!
//! # Algorithm
//!
//! 1. Pop the next candidate. If their preferences are exhausted, they are left over.
//! 2. Take their next preference and advance their cursor.
//! 3. Unknown or ineligible slot type: requeue the candidate.
//! 4. Room available: hold the candidate.
//! 5. Full: evict the weakest holder if strictly weaker, else requeue the candidate.
//!
//! Every pop consumes a preference entry or drops a candidate, so the
//! loop terminates.
//!
//! # References
//!
//! - Gale & Shapley (1962), "College Admissions and the Stability of Marriage"
//! - Roth (1984), "The Evolution of the Labor Market for Medical Interns and Residents"

mod runner;
mod types;

pub use runner::StableRunner;

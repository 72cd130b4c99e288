//! Eligibility predicate shared by every strategy.
//!
//! A candidate is eligible for a slot type, given that slot type's
//! remaining capacity, when all four checks pass:
//!
//! 1. Remaining capacity is positive.
//! 2. Candidate merit is at least the slot type's minimum merit.
//! 3. Candidate category is in the slot type's allowed set.
//! 4. Every required qualification is held by the candidate
//!    (case-insensitive, surrounding whitespace ignored).
//!
//! [`EligibilityFilter::is_eligible`] answers the question;
//! [`EligibilityFilter::check`] also says why not.

mod filter;
mod verdict;

pub use filter::EligibilityFilter;
pub use verdict::{Ineligibility, Verdict};

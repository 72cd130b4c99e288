//! Assignment domain models.
//!
//! Plain data shared by every strategy. Inputs ([`Candidate`],
//! [`SlotType`]) are read-only snapshots supplied by the caller; outputs
//! ([`Commitment`], [`RunResult`]) are immutable facts produced by a run.
//!
//! # Domain Mappings
//!
//! | u-assign | Campus placement | Residency match | School choice |
//! |----------|------------------|-----------------|---------------|
//! | Candidate | Student | Applicant | Pupil |
//! | SlotType | Company drive | Program | School |
//! | Category | Branch | Specialty track | Catchment zone |
//! | Merit | CGPA | Rank score | Test score |

mod candidate;
mod catalog;
mod outcome;
mod slot_type;

pub(crate) use candidate::normalize_label;
pub use candidate::{Candidate, Category};
pub(crate) use catalog::SlotCatalog;
pub use outcome::{Commitment, Displacement, RunResult, SlotFill};
pub use slot_type::SlotType;

//! Rule composition for ordering candidates.
//!
//! Rules are applied in order; a later rule is only consulted when every
//! earlier rule reports a tie. A final [`TieBreaker`] settles anything
//! left. The greedy strategy processes candidates in
//! [`RankingEngine::merit_priority`] order: merit descending, then name
//! ascending, then input position.
//!
//! # References
//!
//! Serial dictatorship: Abdulkadiroglu & Sonmez (1998), "Random Serial
//! Dictatorship and the Core from Random Endowments in House Allocation
//! Problems"

mod engine;
mod rules;
mod types;

pub use engine::{RankingEngine, TieBreaker};
pub use rules::{MeritDescending, NameAscending};
pub use types::RankingRule;

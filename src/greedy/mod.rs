//! Merit-priority greedy allocation (serial dictatorship).
//!
//! Candidates are visited once, strongest first
//! ([`RankingEngine::merit_priority`](crate::ranking::RankingEngine::merit_priority)).
//! Each takes the first slot type in their own preference order that is
//! eligible and has capacity left. Nobody is ever moved once committed,
//! so a stronger candidate can never be displaced by a weaker one.
//!
//! # References
//!
//! Svensson (1999), "Strategy-proof allocation of indivisible goods"

mod runner;

pub use runner::GreedyRunner;

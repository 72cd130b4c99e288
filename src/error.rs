//! Error types.
//!
//! Allocation itself is total: malformed input is skipped, never fatal.
//! These errors surface only from strategy parsing and strict-mode
//! validation.

use thiserror::Error;

/// An integrity problem in caller-supplied input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("duplicate candidate id `{0}`")]
    DuplicateCandidate(String),

    #[error("duplicate slot type id `{0}`")]
    DuplicateSlotType(String),

    #[error("candidate `{id}` has non-finite merit {merit}")]
    NonFiniteMerit { id: String, merit: f64 },

    #[error("slot type `{id}` has non-finite minimum merit {min_merit}")]
    NonFiniteMinMerit { id: String, min_merit: f64 },

    #[error("slot type `{id}` has negative capacity {capacity}")]
    NegativeCapacity { id: String, capacity: i64 },

    #[error("candidate `{candidate}` prefers unknown slot type `{slot_type}`")]
    UnknownPreference { candidate: String, slot_type: String },

    #[error("candidate `{candidate}` lists slot type `{slot_type}` more than once")]
    RepeatedPreference { candidate: String, slot_type: String },
}

/// Errors returned by the fallible allocation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    #[error("unknown strategy `{0}`, expected `greedy` or `stable`")]
    UnknownStrategy(String),

    #[error("invalid input: {} issue(s), first: {}", .0.len(), first_issue(.0))]
    InvalidInput(Vec<InputError>),
}

fn first_issue(issues: &[InputError]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

//! Run outputs.

use super::candidate::{Candidate, Category};
use super::slot_type::SlotType;
use crate::allocation::Strategy;

/// A candidate committed to a slot type, snapshotted at commitment time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Commitment {
    pub candidate_id: String,
    pub candidate_name: String,
    pub category: Category,
    pub merit: f64,
    pub slot_type_id: String,
    pub slot_type_name: String,
}

impl Commitment {
    pub(crate) fn new(candidate: &Candidate, slot_type: &SlotType) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            category: candidate.category.clone(),
            merit: candidate.merit,
            slot_type_id: slot_type.id.clone(),
            slot_type_name: slot_type.name.clone(),
        }
    }
}

/// Final occupancy of one slot type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotFill {
    pub slot_type_id: String,
    pub slot_type_name: String,
    /// Declared capacity, as supplied.
    pub capacity: i64,
    pub filled: usize,
    /// Usable capacity left after the run.
    pub remaining: usize,
}

impl SlotFill {
    pub(crate) fn new(slot_type: &SlotType, filled: usize) -> Self {
        Self {
            slot_type_id: slot_type.id.clone(),
            slot_type_name: slot_type.name.clone(),
            capacity: slot_type.capacity,
            filled,
            remaining: slot_type.usable_capacity().saturating_sub(filled),
        }
    }
}

/// One eviction performed by the stable strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Displacement {
    pub slot_type_id: String,
    pub evicted_id: String,
    pub evicted_merit: f64,
    pub admitted_id: String,
    pub admitted_merit: f64,
}

/// Result of an allocation run.
///
/// `commitments` and `leftover` partition the input candidates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,

    /// Commitments in the order the strategy emits them.
    pub commitments: Vec<Commitment>,

    /// Candidates not committed anywhere.
    pub leftover: Vec<Candidate>,

    /// Occupancy per input slot type, in input order.
    pub slot_fill: Vec<SlotFill>,

    /// Evictions in the order they happened (stable strategy only).
    pub displacements: Vec<Displacement>,

    /// Number of proposals evaluated against a slot type.
    pub proposals: usize,
}

impl RunResult {
    /// Ids of committed candidates, in commitment order.
    pub fn placed_ids(&self) -> Vec<&str> {
        self.commitments
            .iter()
            .map(|c| c.candidate_id.as_str())
            .collect()
    }

    /// The commitment of a candidate, if any.
    pub fn commitment_for(&self, candidate_id: &str) -> Option<&Commitment> {
        self.commitments
            .iter()
            .find(|c| c.candidate_id == candidate_id)
    }

    pub fn is_placed(&self, candidate_id: &str) -> bool {
        self.commitment_for(candidate_id).is_some()
    }

    /// Number of commitments held by a slot type.
    pub fn filled(&self, slot_type_id: &str) -> usize {
        self.commitments
            .iter()
            .filter(|c| c.slot_type_id == slot_type_id)
            .count()
    }
}

//! Greedy execution loop.

use tracing::trace;

use crate::allocation::Strategy;
use crate::eligibility::EligibilityFilter;
use crate::models::{Candidate, Commitment, RunResult, SlotCatalog, SlotFill, SlotType};
use crate::ranking::RankingEngine;

/// Executes the merit-priority greedy allocation.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy allocation.
    ///
    /// Commitments come out in processing order; leftover candidates keep
    /// the merit-priority order.
    pub fn run(candidates: &[Candidate], slot_types: &[SlotType]) -> RunResult {
        let catalog = SlotCatalog::new(slot_types);
        let mut remaining: Vec<usize> =
            slot_types.iter().map(SlotType::usable_capacity).collect();

        let mut commitments = Vec::new();
        let mut leftover = Vec::new();
        let mut proposals = 0usize;

        for index in RankingEngine::merit_priority().sort_indices(candidates) {
            let candidate = &candidates[index];
            let mut placed = false;

            for slot_id in &candidate.preferences {
                let Some(slot_index) = catalog.position(slot_id) else {
                    continue;
                };
                let slot_type = catalog.get(slot_index);
                proposals += 1;

                if EligibilityFilter::is_eligible(candidate, slot_type, remaining[slot_index]) {
                    trace!(candidate = %candidate.id, slot_type = %slot_type.id, "committed");
                    commitments.push(Commitment::new(candidate, slot_type));
                    remaining[slot_index] -= 1;
                    placed = true;
                    break;
                }
            }

            if !placed {
                trace!(candidate = %candidate.id, "left over");
                leftover.push(candidate.clone());
            }
        }

        let slot_fill = slot_types
            .iter()
            .zip(&remaining)
            .map(|(slot_type, &left)| SlotFill::new(slot_type, slot_type.usable_capacity() - left))
            .collect();

        RunResult {
            strategy: Strategy::Greedy,
            commitments,
            leftover,
            slot_fill,
            displacements: Vec::new(),
            proposals,
        }
    }
}

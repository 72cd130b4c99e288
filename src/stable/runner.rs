//! Deferred-acceptance execution loop.

use std::collections::VecDeque;

use tracing::trace;

use super::types::{AcceptedSet, Holding};
use crate::allocation::Strategy;
use crate::eligibility::EligibilityFilter;
use crate::models::{
    Candidate, Commitment, Displacement, RunResult, SlotCatalog, SlotFill, SlotType,
};

/// Executes capacity-constrained deferred acceptance.
pub struct StableRunner;

impl StableRunner {
    /// Runs the stable allocation.
    ///
    /// Commitments are grouped by slot type in input order, weakest holder
    /// first within each; leftover candidates keep input order.
    pub fn run(candidates: &[Candidate], slot_types: &[SlotType]) -> RunResult {
        let catalog = SlotCatalog::new(slot_types);
        let mut accepted: Vec<AcceptedSet> = slot_types
            .iter()
            .map(|slot_type| AcceptedSet::new(slot_type.usable_capacity()))
            .collect();

        // Next preference to propose to, per candidate. Only ever advances.
        let mut cursor = vec![0usize; candidates.len()];
        let mut queue: VecDeque<usize> = (0..candidates.len()).collect();
        let mut displacements = Vec::new();
        let mut proposals = 0usize;

        while let Some(index) = queue.pop_front() {
            let candidate = &candidates[index];
            let Some(slot_id) = candidate.preferences.get(cursor[index]) else {
                trace!(candidate = %candidate.id, "preferences exhausted");
                continue;
            };
            cursor[index] += 1;

            let Some(slot_index) = catalog.position(slot_id) else {
                queue.push_front(index);
                continue;
            };
            let slot_type = catalog.get(slot_index);
            proposals += 1;

            // Fullness is settled by displacement below, not by the filter.
            if !EligibilityFilter::is_eligible(candidate, slot_type, slot_type.usable_capacity()) {
                trace!(candidate = %candidate.id, slot_type = %slot_type.id, "rejected");
                queue.push_front(index);
                continue;
            }

            let proposal = Holding {
                candidate: index,
                merit: candidate.merit,
            };
            let held = &mut accepted[slot_index];

            if held.has_room() {
                trace!(candidate = %candidate.id, slot_type = %slot_type.id, "held");
                held.admit(proposal);
                continue;
            }

            let stronger = held
                .weakest()
                .is_some_and(|weakest| candidate.merit > weakest.merit);
            if !stronger {
                trace!(candidate = %candidate.id, slot_type = %slot_type.id, "outranked");
                queue.push_front(index);
                continue;
            }

            if let Some(evicted) = held.replace_weakest(proposal) {
                let evicted_candidate = &candidates[evicted.candidate];
                trace!(
                    candidate = %candidate.id,
                    evicted = %evicted_candidate.id,
                    slot_type = %slot_type.id,
                    "displaced"
                );
                displacements.push(Displacement {
                    slot_type_id: slot_type.id.clone(),
                    evicted_id: evicted_candidate.id.clone(),
                    evicted_merit: evicted.merit,
                    admitted_id: candidate.id.clone(),
                    admitted_merit: candidate.merit,
                });
                queue.push_front(evicted.candidate);
            }
        }

        assemble(candidates, &catalog, &accepted, displacements, proposals)
    }
}

fn assemble(
    candidates: &[Candidate],
    catalog: &SlotCatalog<'_>,
    accepted: &[AcceptedSet],
    displacements: Vec<Displacement>,
    proposals: usize,
) -> RunResult {
    let mut placed = vec![false; candidates.len()];
    let mut commitments = Vec::new();
    let mut slot_fill = Vec::with_capacity(catalog.len());

    for (slot_index, held) in accepted.iter().enumerate() {
        let slot_type = catalog.get(slot_index);
        for holding in held.members() {
            placed[holding.candidate] = true;
            commitments.push(Commitment::new(&candidates[holding.candidate], slot_type));
        }
        slot_fill.push(SlotFill::new(slot_type, held.len()));
    }

    let leftover = candidates
        .iter()
        .zip(&placed)
        .filter(|&(_, &is_placed)| !is_placed)
        .map(|(candidate, _)| candidate.clone())
        .collect();

    RunResult {
        strategy: Strategy::Stable,
        commitments,
        leftover,
        slot_fill,
        displacements,
        proposals,
    }
}

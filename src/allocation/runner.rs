//! Allocation entry points.

use tracing::debug;

use super::config::{AllocConfig, Strategy};
use crate::error::AllocError;
use crate::greedy::GreedyRunner;
use crate::models::{Candidate, RunResult, SlotType};
use crate::stable::StableRunner;
use crate::validation::validate_input;

/// Runs one allocation.
///
/// Never fails: unknown preference ids are skipped and unusable slot
/// types simply admit nobody. Inputs are not modified.
///
/// # Examples
///
/// ```
/// use u_assign::allocation::{allocate, Strategy};
/// use u_assign::models::{Candidate, SlotType};
///
/// let slots = vec![SlotType::new("c1", "Acme", 1)
///     .with_min_merit(8.0)
///     .with_allowed_categories(["X"])];
/// let cohort = vec![
///     Candidate::new("a", "Ada", "X", 9.0).with_preferences(["c1"]),
///     Candidate::new("b", "Bo", "X", 7.5).with_preferences(["c1"]),
/// ];
///
/// let result = allocate(&cohort, &slots, Strategy::Greedy);
/// assert_eq!(result.placed_ids(), vec!["a"]);
/// assert_eq!(result.leftover[0].id, "b");
/// ```
pub fn allocate(
    candidates: &[Candidate],
    slot_types: &[SlotType],
    strategy: Strategy,
) -> RunResult {
    debug!(
        %strategy,
        candidates = candidates.len(),
        slot_types = slot_types.len(),
        "allocation started"
    );

    let result = match strategy {
        Strategy::Greedy => GreedyRunner::run(candidates, slot_types),
        Strategy::Stable => StableRunner::run(candidates, slot_types),
    };

    debug!(
        %strategy,
        placed = result.commitments.len(),
        leftover = result.leftover.len(),
        proposals = result.proposals,
        "allocation finished"
    );
    result
}

/// Runs one allocation under `config`.
///
/// In strict mode, input is validated first and any integrity issue is
/// returned as [`AllocError::InvalidInput`] without running.
pub fn allocate_with(
    config: &AllocConfig,
    candidates: &[Candidate],
    slot_types: &[SlotType],
) -> Result<RunResult, AllocError> {
    if config.strict {
        let issues = validate_input(candidates, slot_types);
        if !issues.is_empty() {
            debug!(issues = issues.len(), "strict allocation rejected input");
            return Err(AllocError::InvalidInput(issues));
        }
    }
    Ok(allocate(candidates, slot_types, config.strategy))
}

/// Allocates independent cohorts on the rayon pool.
///
/// Each cohort is a `(candidates, slot_types)` pair with its own
/// capacities; results are returned in cohort order.
#[cfg(feature = "parallel")]
pub fn allocate_cohorts(
    cohorts: &[(Vec<Candidate>, Vec<SlotType>)],
    strategy: Strategy,
) -> Vec<RunResult> {
    use rayon::prelude::*;

    cohorts
        .par_iter()
        .map(|(candidates, slot_types)| allocate(candidates, slot_types, strategy))
        .collect()
}

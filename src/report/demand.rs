//! Preference demand per slot type.

use crate::models::{Candidate, SlotType};

/// How contested one slot type is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotDemand {
    pub slot_type_id: String,
    /// Candidates ranking this slot type within the considered depth.
    pub demand: usize,
    pub capacity: i64,
    pub min_merit: f64,
}

/// Counts, per slot type, the candidates ranking it within their first
/// `depth` preferences. Output follows slot-type input order.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Candidate, SlotType};
/// use u_assign::report::preference_demand;
///
/// let slots = vec![SlotType::new("a", "A", 1), SlotType::new("b", "B", 1)];
/// let cohort = vec![
///     Candidate::new("1", "One", "X", 7.0).with_preferences(["a", "b"]),
///     Candidate::new("2", "Two", "X", 7.0).with_preferences(["b", "a"]),
/// ];
///
/// let top1 = preference_demand(&cohort, &slots, 1);
/// assert_eq!((top1[0].demand, top1[1].demand), (1, 1));
///
/// let top2 = preference_demand(&cohort, &slots, 2);
/// assert_eq!((top2[0].demand, top2[1].demand), (2, 2));
/// ```
pub fn preference_demand(
    candidates: &[Candidate],
    slot_types: &[SlotType],
    depth: usize,
) -> Vec<SlotDemand> {
    slot_types
        .iter()
        .map(|slot_type| SlotDemand {
            slot_type_id: slot_type.id.clone(),
            demand: candidates
                .iter()
                .filter(|c| {
                    c.preferences
                        .iter()
                        .take(depth)
                        .any(|id| *id == slot_type.id)
                })
                .count(),
            capacity: slot_type.capacity,
            min_merit: slot_type.min_merit,
        })
        .collect()
}

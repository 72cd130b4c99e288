//! Placement statistics.

use std::collections::BTreeMap;

use crate::models::RunResult;

/// Fill level of one slot type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotUtilization {
    pub slot_type_id: String,
    pub slot_type_name: String,
    pub filled: usize,
    pub capacity: i64,
    /// `filled / capacity`, zero when capacity is not positive.
    pub fill_ratio: f64,
}

/// Aggregate statistics of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunSummary {
    pub total_candidates: usize,
    pub placed: usize,
    pub unplaced: usize,
    /// Fraction of candidates placed, in `[0, 1]`.
    pub placement_rate: f64,
    /// Mean merit of placed candidates.
    pub average_merit_placed: f64,
    /// Placed candidates per category label.
    pub placed_by_category: BTreeMap<String, usize>,
    pub utilization: Vec<SlotUtilization>,
}

impl RunSummary {
    /// Summarizes a run.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::allocation::{allocate, Strategy};
    /// use u_assign::report::RunSummary;
    ///
    /// let summary = RunSummary::from_result(&allocate(&[], &[], Strategy::Greedy));
    /// assert_eq!(summary.placement_rate, 0.0);
    /// assert_eq!(summary.average_merit_placed, 0.0);
    /// ```
    pub fn from_result(result: &RunResult) -> Self {
        let placed = result.commitments.len();
        let unplaced = result.leftover.len();
        let total_candidates = placed + unplaced;

        let placement_rate = ratio(placed as f64, total_candidates as f64);
        let merit_sum: f64 = result.commitments.iter().map(|c| c.merit).sum();
        let average_merit_placed = ratio(merit_sum, placed as f64);

        let mut placed_by_category = BTreeMap::new();
        for commitment in &result.commitments {
            *placed_by_category
                .entry(commitment.category.to_string())
                .or_insert(0) += 1;
        }

        let utilization = result
            .slot_fill
            .iter()
            .map(|fill| SlotUtilization {
                slot_type_id: fill.slot_type_id.clone(),
                slot_type_name: fill.slot_type_name.clone(),
                filled: fill.filled,
                capacity: fill.capacity,
                fill_ratio: ratio(fill.filled as f64, fill.capacity.max(0) as f64),
            })
            .collect();

        Self {
            total_candidates,
            placed,
            unplaced,
            placement_rate,
            average_merit_placed,
            placed_by_category,
            utilization,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

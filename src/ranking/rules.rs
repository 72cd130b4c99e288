//! Built-in candidate rules.

use std::cmp::Ordering;

use super::types::RankingRule;
use crate::models::Candidate;

/// Higher merit first. Exact comparison; NaN ranks last.
pub struct MeritDescending;

impl RankingRule<Candidate> for MeritDescending {
    fn name(&self) -> &str {
        "MeritDescending"
    }

    fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        rank_key(b.merit)
            .partial_cmp(&rank_key(a.merit))
            .unwrap_or(Ordering::Equal)
    }
}

fn rank_key(merit: f64) -> f64 {
    if merit.is_nan() {
        f64::NEG_INFINITY
    } else {
        merit
    }
}

/// Name ascending, byte-wise (case-sensitive).
pub struct NameAscending;

impl RankingRule<Candidate> for NameAscending {
    fn name(&self) -> &str {
        "NameAscending"
    }

    fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        a.name.cmp(&b.name)
    }
}

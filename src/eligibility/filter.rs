//! The four-check eligibility predicate.

use super::verdict::{Ineligibility, Verdict};
use crate::models::normalize_label;
use crate::models::{Candidate, SlotType};

/// Stateless eligibility predicate.
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Whether `candidate` may be committed to `slot_type` now.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::eligibility::EligibilityFilter;
    /// use u_assign::models::{Candidate, SlotType};
    ///
    /// let tcs = SlotType::new("c4", "TCS", 10)
    ///     .with_min_merit(6.5)
    ///     .with_allowed_categories(["CSE", "MECH"])
    ///     .with_required_qualifications(["SQL"]);
    /// let student = Candidate::new("s1", "Rohan U.", "MECH", 7.0).with_qualification("sql ");
    ///
    /// assert!(EligibilityFilter::is_eligible(&student, &tcs, 10));
    /// assert!(!EligibilityFilter::is_eligible(&student, &tcs, 0));
    /// ```
    pub fn is_eligible(candidate: &Candidate, slot_type: &SlotType, remaining: usize) -> bool {
        remaining > 0 && Self::meets_requirements(candidate, slot_type)
    }

    /// Merit, category and qualification checks, without capacity.
    pub fn meets_requirements(candidate: &Candidate, slot_type: &SlotType) -> bool {
        meets_merit(candidate, slot_type)
            && slot_type.allowed_categories.contains(&candidate.category)
            && missing_qualifications(candidate, slot_type).is_empty()
    }

    /// Evaluates every check and collects each failure.
    pub fn check(candidate: &Candidate, slot_type: &SlotType, remaining: usize) -> Verdict {
        let mut reasons = Vec::new();

        if remaining == 0 {
            reasons.push(Ineligibility::NoCapacity);
        }
        if !meets_merit(candidate, slot_type) {
            reasons.push(Ineligibility::BelowMinimumMerit {
                required: slot_type.min_merit,
                actual: candidate.merit,
            });
        }
        if !slot_type.allowed_categories.contains(&candidate.category) {
            reasons.push(Ineligibility::CategoryNotAllowed(candidate.category.clone()));
        }
        let missing = missing_qualifications(candidate, slot_type);
        if !missing.is_empty() {
            reasons.push(Ineligibility::MissingQualifications(missing));
        }

        Verdict::new(reasons)
    }
}

// NaN on either side fails.
fn meets_merit(candidate: &Candidate, slot_type: &SlotType) -> bool {
    candidate.merit >= slot_type.min_merit
}

fn missing_qualifications(candidate: &Candidate, slot_type: &SlotType) -> Vec<String> {
    if slot_type.required_qualifications.is_empty() {
        return Vec::new();
    }

    let held: Vec<String> = candidate
        .qualifications
        .iter()
        .map(|q| normalize_label(q))
        .collect();

    slot_type
        .required_qualifications
        .iter()
        .filter(|required| !held.contains(&normalize_label(required)))
        .cloned()
        .collect()
}

//! Input integrity checks.
//!
//! Allocation tolerates every issue reported here (unknown preferences
//! are skipped, unusable slot types admit nobody). Validation lets a
//! caller surface them instead, or refuse to run in strict mode.

use std::collections::HashSet;

use crate::error::InputError;
use crate::models::{Candidate, SlotType};

/// Collects every integrity issue in the input, in input order.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Candidate, SlotType};
/// use u_assign::validation::validate_input;
///
/// let slots = vec![SlotType::new("c1", "Acme", 2)];
/// let cohort = vec![Candidate::new("s1", "Ada", "X", 8.0).with_preferences(["c1", "c2"])];
///
/// let issues = validate_input(&cohort, &slots);
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].to_string(), "candidate `s1` prefers unknown slot type `c2`");
/// ```
pub fn validate_input(candidates: &[Candidate], slot_types: &[SlotType]) -> Vec<InputError> {
    let mut issues = Vec::new();

    let mut slot_ids = HashSet::with_capacity(slot_types.len());
    for slot_type in slot_types {
        if !slot_ids.insert(slot_type.id.as_str()) {
            issues.push(InputError::DuplicateSlotType(slot_type.id.clone()));
        }
        if !slot_type.min_merit.is_finite() {
            issues.push(InputError::NonFiniteMinMerit {
                id: slot_type.id.clone(),
                min_merit: slot_type.min_merit,
            });
        }
        if slot_type.capacity < 0 {
            issues.push(InputError::NegativeCapacity {
                id: slot_type.id.clone(),
                capacity: slot_type.capacity,
            });
        }
    }

    let mut candidate_ids = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate_ids.insert(candidate.id.as_str()) {
            issues.push(InputError::DuplicateCandidate(candidate.id.clone()));
        }
        if !candidate.merit.is_finite() {
            issues.push(InputError::NonFiniteMerit {
                id: candidate.id.clone(),
                merit: candidate.merit,
            });
        }

        let mut seen = HashSet::with_capacity(candidate.preferences.len());
        for preference in &candidate.preferences {
            if !slot_ids.contains(preference.as_str()) {
                issues.push(InputError::UnknownPreference {
                    candidate: candidate.id.clone(),
                    slot_type: preference.clone(),
                });
            } else if !seen.insert(preference.as_str()) {
                issues.push(InputError::RepeatedPreference {
                    candidate: candidate.id.clone(),
                    slot_type: preference.clone(),
                });
            }
        }
    }

    issues
}

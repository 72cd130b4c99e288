//! Explained eligibility outcomes.

use std::fmt;

use crate::models::Category;

/// Why a candidate cannot be committed to a slot type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Ineligibility {
    /// No remaining capacity.
    NoCapacity,
    BelowMinimumMerit { required: f64, actual: f64 },
    CategoryNotAllowed(Category),
    /// Required qualifications the candidate lacks, as the slot type spells them.
    MissingQualifications(Vec<String>),
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligibility::NoCapacity => write!(f, "no remaining capacity"),
            Ineligibility::BelowMinimumMerit { required, actual } => {
                write!(f, "merit {actual:.2} below minimum {required:.2}")
            }
            Ineligibility::CategoryNotAllowed(category) => {
                write!(f, "category {category} not allowed")
            }
            Ineligibility::MissingQualifications(labels) => {
                write!(f, "missing qualifications: {}", labels.join(", "))
            }
        }
    }
}

/// Outcome of [`EligibilityFilter::check`](super::EligibilityFilter::check).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    reasons: Vec<Ineligibility>,
}

impl Verdict {
    pub(crate) fn new(reasons: Vec<Ineligibility>) -> Self {
        Self { reasons }
    }

    pub fn is_eligible(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Failed checks, in check order.
    pub fn reasons(&self) -> &[Ineligibility] {
        &self.reasons
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            "eligible".to_string()
        } else {
            let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
            format!("not eligible: {}", reasons.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        assert_eq!(Verdict::default().summary(), "eligible");

        let verdict = Verdict::new(vec![
            Ineligibility::BelowMinimumMerit {
                required: 8.0,
                actual: 7.5,
            },
            Ineligibility::MissingQualifications(vec!["Java".into(), "AWS".into()]),
        ]);
        assert_eq!(
            verdict.summary(),
            "not eligible: merit 7.50 below minimum 8.00; missing qualifications: Java, AWS"
        );
    }
}

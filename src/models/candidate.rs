//! Candidate model.

use std::fmt;

/// Category label of a candidate (e.g. an academic branch).
///
/// Compared exactly; the set of valid labels is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A party to be assigned to at most one slot type.
///
/// # Examples
///
/// ```
/// use u_assign::models::Candidate;
///
/// let c = Candidate::new("s1", "Aarav A.", "CSE", 9.1)
///     .with_qualifications(["Python", "SQL"])
///     .with_preferences(["google", "tcs"]);
///
/// assert_eq!(c.preferences, vec!["google", "tcs"]);
/// assert!(c.has_qualification("  python "));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    /// Unique identifier.
    pub id: String,

    /// Display name. Also the secondary key of the merit-priority order.
    pub name: String,

    /// Category label, matched against a slot type's allowed set.
    pub category: Category,

    /// Merit score, conventionally in `[0, 10]`. Higher is stronger.
    pub merit: f64,

    /// Possessed qualification labels (case-insensitive, whitespace-trimmed).
    #[cfg_attr(feature = "serde", serde(default))]
    pub qualifications: Vec<String>,

    /// Ranked slot-type ids, most preferred first. May be partial or empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Vec<String>,
}

impl Candidate {
    /// Creates a candidate with no qualifications and no preferences.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<Category>,
        merit: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            merit,
            qualifications: Vec::new(),
            preferences: Vec::new(),
        }
    }

    /// Adds one qualification label.
    pub fn with_qualification(mut self, label: impl Into<String>) -> Self {
        self.qualifications.push(label.into());
        self
    }

    /// Replaces the qualification set.
    pub fn with_qualifications<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.qualifications = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the ranked preference list.
    pub fn with_preferences<I, S>(mut self, slot_type_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = slot_type_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the candidate holds `label`, ignoring case and surrounding whitespace.
    pub fn has_qualification(&self, label: &str) -> bool {
        let wanted = normalize_label(label);
        self.qualifications
            .iter()
            .any(|held| normalize_label(held) == wanted)
    }
}

pub(crate) fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

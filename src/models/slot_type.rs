//! Slot type model.

use super::candidate::Category;

/// A capacity-limited destination with eligibility rules.
///
/// # Examples
///
/// ```
/// use u_assign::models::SlotType;
///
/// let google = SlotType::new("c1", "Google", 3)
///     .with_min_merit(9.0)
///     .with_allowed_categories(["CSE", "ECE"])
///     .with_required_qualifications(["Data Structures", "Python"]);
///
/// assert_eq!(google.usable_capacity(), 3);
/// assert!(google.allows("CSE"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotType {
    /// Unique identifier, referenced by candidate preferences.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Declared capacity. Zero or negative means no usable capacity.
    pub capacity: i64,

    /// Minimum merit a candidate must reach (inclusive).
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_merit: f64,

    /// Categories admitted. Empty admits nobody.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_categories: Vec<Category>,

    /// Qualifications a candidate must hold, all of them. Empty means none required.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_qualifications: Vec<String>,
}

impl SlotType {
    /// Creates a slot type with no merit floor, no admitted categories and
    /// no qualification requirement.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            min_merit: 0.0,
            allowed_categories: Vec::new(),
            required_qualifications: Vec::new(),
        }
    }

    pub fn with_min_merit(mut self, min_merit: f64) -> Self {
        self.min_merit = min_merit;
        self
    }

    pub fn with_allowed_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.allowed_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required_qualifications<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_qualifications = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Declared capacity with negative values clamped to zero.
    pub fn usable_capacity(&self) -> usize {
        usize::try_from(self.capacity.max(0)).unwrap_or(usize::MAX)
    }

    /// Whether `category` is in the admitted set.
    pub fn allows(&self, category: impl Into<Category>) -> bool {
        let category = category.into();
        self.allowed_categories.contains(&category)
    }
}

//! Core trait for ranking rules.

use std::cmp::Ordering;

/// A pairwise ordering criterion.
///
/// `Ordering::Less` means `a` ranks ahead of `b`. Returning
/// `Ordering::Equal` defers to the next rule.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_assign::models::Candidate;
/// use u_assign::ranking::RankingRule;
///
/// // Fewer declared preferences first.
/// struct ShortestList;
///
/// impl RankingRule<Candidate> for ShortestList {
///     fn name(&self) -> &str { "ShortestList" }
///     fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
///         a.preferences.len().cmp(&b.preferences.len())
///     }
/// }
/// ```
pub trait RankingRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Compares two items under this rule.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

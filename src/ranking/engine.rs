//! Rule composition engine.

use std::cmp::Ordering;

use super::rules::{MeritDescending, NameAscending};
use super::types::RankingRule;
use crate::models::Candidate;

/// Strategy for breaking ties when all rules compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the original order (stable sort).
    PreserveOrder,

    /// Break ties by item index (deterministic).
    ByIndex,
}

/// Engine for composing and applying ranking rules.
///
/// # Examples
///
/// ```
/// use u_assign::models::Candidate;
/// use u_assign::ranking::{MeritDescending, NameAscending, RankingEngine, TieBreaker};
///
/// let engine = RankingEngine::new()
///     .with_rule(MeritDescending)
///     .with_rule(NameAscending)
///     .with_tie_breaker(TieBreaker::ByIndex);
///
/// let cohort = vec![
///     Candidate::new("s1", "Vivaan", "CSE", 8.0),
///     Candidate::new("s2", "Aditya", "CSE", 8.0),
///     Candidate::new("s3", "Riya", "ECE", 9.5),
/// ];
///
/// assert_eq!(engine.sort_indices(&cohort), vec![2, 1, 0]);
/// ```
pub struct RankingEngine<T> {
    rules: Vec<Box<dyn RankingRule<T>>>,
    tie_breaker: TieBreaker,
}

impl<T> RankingEngine<T> {
    /// Creates an engine with no rules and order-preserving ties.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::PreserveOrder,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: RankingRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    fn compare(&self, items: &[T], a: usize, b: usize) -> Ordering {
        for rule in &self.rules {
            let ord = rule.compare(&items[a], &items[b]);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::PreserveOrder => Ordering::Equal,
            TieBreaker::ByIndex => a.cmp(&b),
        }
    }

    /// Returns indices into `items`, highest-ranked first.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }
        indices.sort_by(|&a, &b| self.compare(items, a, b));
        indices
    }

    /// Returns references to `items`, highest-ranked first.
    pub fn sort<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.sort_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the index of the highest-ranked item.
    ///
    /// Returns `None` if the slice is empty.
    pub fn select_best(&self, items: &[T]) -> Option<usize> {
        (0..items.len()).min_by(|&a, &b| self.compare(items, a, b))
    }
}

impl RankingEngine<Candidate> {
    /// Merit descending, then name ascending, then input position.
    pub fn merit_priority() -> Self {
        Self::new()
            .with_rule(MeritDescending)
            .with_rule(NameAscending)
            .with_tie_breaker(TieBreaker::ByIndex)
    }
}

impl<T> Default for RankingEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

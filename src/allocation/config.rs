//! Allocation configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::AllocError;

/// Assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Merit-priority serial dictatorship.
    #[default]
    Greedy,

    /// Capacity-constrained deferred acceptance.
    Stable,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Stable => "stable",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Strategy::Greedy),
            "stable" => Ok(Strategy::Stable),
            _ => Err(AllocError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration for [`allocate_with`](super::allocate_with).
///
/// # Examples
///
/// ```
/// use u_assign::allocation::{AllocConfig, Strategy};
///
/// let config = AllocConfig::default()
///     .with_strategy(Strategy::Stable)
///     .with_strict(true);
///
/// assert_eq!(config.strategy, Strategy::Stable);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocConfig {
    /// Strategy to run.
    pub strategy: Strategy,

    /// Reject input with integrity issues instead of skipping them.
    pub strict: bool,
}

impl AllocConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AllocConfig::default();
        assert_eq!(config.strategy, Strategy::Greedy);
        assert!(!config.strict);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!(" Stable ".parse::<Strategy>(), Ok(Strategy::Stable));
        assert_eq!(
            "lottery".parse::<Strategy>(),
            Err(AllocError::UnknownStrategy("lottery".into()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in [Strategy::Greedy, Strategy::Stable] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}

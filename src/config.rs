//! Run configuration
//!
//! Built fresh for every run; the CLI maps its flags onto these fields.

use crate::core::{Constraints, SizeRange};
use crate::model::{ModelWeights, Strategy};

/// Tunable settings for a solving session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// How candidates are ranked each round
    pub strategy: Strategy,
    /// Weighting used when building the frequency model
    pub weights: ModelWeights,
    /// Admissible candidate lengths
    pub size_range: SizeRange,
    /// Stop after this many rounds of feedback
    pub max_rounds: usize,
    /// Guesses a game allows; solving in more counts as a failure
    pub tries: usize,
    /// How many of the best candidates to show each round
    pub display_count: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_weights(mut self, weights: ModelWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub const fn with_size_range(mut self, size_range: SizeRange) -> Self {
        self.size_range = size_range;
        self
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn with_tries(mut self, tries: usize) -> Self {
        self.tries = tries;
        self
    }

    /// Starting constraints: only the size range is known
    #[must_use]
    pub fn initial_constraints(&self) -> Constraints {
        Constraints::unconstrained(self.size_range)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            weights: ModelWeights::default(),
            size_range: SizeRange::default(),
            max_rounds: 12,
            tries: 6,
            display_count: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.weights, ModelWeights::new(1.0, 3.0));
        assert_eq!(config.size_range, SizeRange::exactly(5));
        assert_eq!(config.display_count, 10);
        assert_eq!(config.tries, 6);
        assert_eq!(config.strategy, Strategy::Positional);
    }

    #[test]
    fn builders_set_fields() {
        let config = SolverConfig::default()
            .with_strategy(Strategy::Entropy)
            .with_weights(ModelWeights::new(0.1, 1.0))
            .with_tries(4)
            .with_max_rounds(8);

        assert_eq!(config.strategy, Strategy::Entropy);
        assert_eq!(config.weights, ModelWeights::new(0.1, 1.0));
        assert_eq!(config.tries, 4);
        assert_eq!(config.max_rounds, 8);
    }

    #[test]
    fn initial_constraints_are_fresh_each_call() {
        let config = SolverConfig::default().with_size_range(SizeRange::new(4, 6));

        let mut first = config.initial_constraints();
        first.positional.insert(0, b'a');

        let second = config.initial_constraints();
        assert!(second.is_unconstrained());
        assert_eq!(second.size_range, SizeRange::new(4, 6));
        assert_eq!(second.letter_at(0), None);
    }
}

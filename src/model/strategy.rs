//! Ranking strategy selection

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a round's candidates are ranked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Positional letter frequency (the default)
    #[default]
    Positional,
    /// Information gain over the candidate pool
    Entropy,
}

/// Error for an unrecognised strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}; expected 'positional' or 'entropy'")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "positional" | "frequency" => Ok(Self::Positional),
            "entropy" => Ok(Self::Entropy),
            _ => Err(UnknownStrategy(name.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positional => "positional",
            Self::Entropy => "entropy",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("positional".parse(), Ok(Strategy::Positional));
        assert_eq!("Frequency".parse(), Ok(Strategy::Positional));
        assert_eq!(" entropy ".parse(), Ok(Strategy::Entropy));
        assert_eq!(
            "minimax".parse::<Strategy>(),
            Err(UnknownStrategy("minimax".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for strategy in [Strategy::Positional, Strategy::Entropy] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}

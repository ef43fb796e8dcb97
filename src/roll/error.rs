use crate::common::BinaryOperator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("too many dice rolled (the limit is {max})")]
    TooManyRolls { max: usize },
    #[error("(at position {position}): cannot divide by zero")]
    ZeroDivision { position: usize },
    #[error("(at position {position}): cannot roll dice with zero sides")]
    ZeroSides { position: usize },
    #[error("(at position {position}): operator '{operator}' must be surrounded by two numbers")]
    Structural {
        position: usize,
        operator: BinaryOperator,
    },
    #[error("expression did not reduce to a single number ({remaining} tokens remain)")]
    IncompleteReduction { remaining: usize },
    #[error("(at position {position}): result is out of range")]
    Overflow { position: usize },
}

impl RollError {
    /// Whether this is a division by zero, including rolling zero-sided dice.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::ZeroDivision { .. } | Self::ZeroSides { .. })
    }
}

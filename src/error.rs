use crate::parse::ParseError;
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Roll(#[from] RollError),
}

impl Error {
    /// Whether the expression divided by zero or rolled zero-sided dice.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Roll(e) if e.is_division_by_zero())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

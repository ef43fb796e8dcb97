//! Evaluates dice notation such as `3d6+2*4`.
//!
//! An expression is split into numbers, operators and `NdS` dice groups, the
//! dice are rolled, and the arithmetic is reduced in two left-to-right passes:
//! `*` and `/` first, then `+` and `-`. Division truncates toward zero.
//!
//! ```
//! let total = dice_expr::evaluate("2d6 + 3").unwrap();
//! assert!((5..=15).contains(&total.value));
//! ```

pub mod common;
mod error;
pub mod parse;
pub mod roll;

#[cfg(test)]
mod test_strategies;

pub use error::{Error, Result};
pub use parse::tokenize;
pub use roll::{RollContext, Roller, Total};

/// Evaluates `expr` with a thread-local random source and the default roll
/// limit.
pub fn evaluate(expr: &str) -> Result<Total> {
    RollContext::default().eval(expr)
}

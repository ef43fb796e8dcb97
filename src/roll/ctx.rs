use super::{error::RollError, reduce, roller::Roller, trace::*, RResult, Total};
use crate::common::*;
use crate::parse::{self, ast::*};
use tracing::debug;

pub type DefaultRoller = rand::prelude::ThreadRng;

pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Owns the random source and bounds how many dice one evaluation may roll.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        match self.max_rolls {
            Some(max) if self.rolls > max => Err(RollError::TooManyRolls { max }),
            _ => Ok(()),
        }
    }

    pub fn roll(
        &mut self,
        num: usize,
        sides: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = UInt> + '_> {
        self.count_rolls(num)?;
        Ok(self.roller.roll_iter(num, sides))
    }

    pub fn roll_one(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        self.count_rolls(1)?;
        Ok(self.roller.roll(sides))
    }

    /// Draws one integer between `a` and `b` inclusive, in either order.
    pub fn roll_range(&mut self, a: Int, b: Int) -> RResult<Int> {
        self.count_rolls(1)?;
        Ok(self.roller.roll_range(a, b))
    }

    /// Replaces every dice group in `seq` with the sum of its rolls.
    pub fn resolve_dice(&mut self, seq: &mut TokenSequence) -> RResult<RollTrace> {
        let mut trace = RollTrace::new();
        for i in 0..seq.len() {
            let Some(Spanned { node: Token::DiceGroup(group), span }) = seq.get(i).cloned() else {
                continue;
            };
            let rolled = self.roll_group(group, span)?;
            debug!(group = %group, rolls = ?rolled.rolls.as_slice(), subtotal = rolled.subtotal, "rolled dice");
            seq.replace(i, rolled.subtotal);
            trace.push(rolled);
        }
        Ok(trace)
    }

    fn roll_group(&mut self, group: DiceGroup, span: Span) -> RResult<RolledGroup> {
        let position = span.start;
        let sides = NonZeroUInt::new(group.sides).ok_or(RollError::ZeroSides { position })?;

        let mut rolls = NonEmpty::new(self.roll_one(sides)?);
        let rest = group.count.get() as usize - 1;
        for x in self.roll(rest, sides)? {
            rolls.push(x);
        }

        let subtotal = rolls
            .iter()
            .try_fold(0, |acc: Int, &x| acc.checked_add(Int::from(x)))
            .ok_or(RollError::Overflow { position })?;

        Ok(RolledGroup {
            count: group.count,
            sides,
            rolls,
            subtotal,
            span,
        })
    }

    /// Tokenizes `expr`, rolls its dice and reduces it to a grand total.
    pub fn eval(&mut self, expr: &str) -> crate::Result<Total> {
        debug!(expression = expr, "evaluating");
        self.rolls = 0;

        let mut seq = parse::tokenize(expr)?;
        let rolls = self.resolve_dice(&mut seq)?;
        tracing::trace!(tokens = %seq, "resolved dice");

        let mut collapses = reduce::reduce(&mut seq, BinaryOperator::MULTIPLICATIVE)?;
        tracing::trace!(tokens = %seq, "resolved multiplication and division");
        collapses.extend(reduce::reduce(&mut seq, BinaryOperator::ADDITIVE)?);

        let value = reduce::finish(&seq)?;
        debug!(total = value, "evaluated");
        Ok(Total::new(value, Trace::new(rolls, collapses)))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;
    use crate::Error;

    fn mock_roller() -> StepRoller {
        StepRoller::new(NonZeroUInt::new(10).unwrap(), 1)
    }

    fn check(s: &str, expected: Int) {
        let mut ctx = RollContext::new_bounded(1000, mock_roller());
        let actual = ctx.eval(s).unwrap();
        assert_eq!(expected, actual.value);
    }

    fn check_err(s: &str, expected: impl Into<Error>) {
        let mut ctx = RollContext::new_bounded(1000, mock_roller());
        let actual = ctx.eval(s);
        assert_eq!(expected.into(), actual.unwrap_err());
    }

    #[test]
    fn test_eval_number() {
        check("2", 2);
        check("  42  ", 42);
    }

    #[test]
    fn test_eval_binary() {
        check("2 + 3", 5);
        check("2+3*4", 14);
        check("10 - 2 - 3", 5);
        check("100 / 10 / 5", 2);
        check("8 / 2 * 3", 12);
        check("7 / 2", 3);
        check("1 - 9 / 2", -3);
        check("1 - 10 * 2 + 3", -16);
    }

    #[test]
    fn test_eval_dice() {
        check("1d20 + 4", 10 + 4);
        check("2d4", 2 + 3);
        check("8d6", 4 + 5 + 6 + 1 + 2 + 3 + 4 + 5);
        check("d6", 4);
        check("3d6+2*4", 4 + 5 + 6 + 8);
        check("1d6 + 2 * 2d6", 4 + 2 * (5 + 6));
    }

    #[test]
    fn test_resolve_dice_in_place() {
        let mut ctx = RollContext::new_unbounded(mock_roller());
        let mut seq = parse::tokenize("2d6 * d4").unwrap();
        let trace = ctx.resolve_dice(&mut seq).unwrap();

        assert_eq!(
            seq.tokens(),
            vec![
                Token::Number(4 + 5),
                Token::Operator(BinaryOperator::Mul),
                Token::Number(4),
            ]
        );
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].rolls.as_slice(), &[4, 5]);
        assert_eq!(trace[0].span, 0..3);
        assert_eq!(trace[1].rolls.as_slice(), &[4]);
        assert_eq!(trace[1].subtotal, 4);
    }

    #[test]
    fn test_eval_trace() {
        let mut ctx = RollContext::new_bounded(1000, mock_roller());
        let total = ctx.eval("3d6 + 2 * 4").unwrap();
        assert_eq!(total.value, 23);
        assert_eq!(total.trace.rolls().count(), 1);
        assert_eq!(total.trace.collapses().count(), 2);
        assert_eq!(total.trace_text(), "3d6 (4, 5, 6) = 15\n2 * 4 = 8\n15 + 8 = 23");
    }

    #[test]
    fn test_err_zero_sides() {
        check_err("2d0", RollError::ZeroSides { position: 0 });
        check_err("1 + 2d0 +", RollError::ZeroSides { position: 4 });
    }

    #[test]
    fn test_err_zero_division() {
        check_err("5/0", RollError::ZeroDivision { position: 1 });
        check_err("1 + 5 / (0)", parse::ParseError::UnexpectedCharacter { position: 8, found: '(' });
    }

    #[test]
    fn test_err_structural() {
        use BinaryOperator::*;

        check_err("+5", RollError::Structural { position: 0, operator: Add });
        check_err("5+", RollError::Structural { position: 1, operator: Add });
        check_err("5++3", RollError::Structural { position: 1, operator: Add });
        check_err("5 * - 3", RollError::Structural { position: 2, operator: Mul });
    }

    #[test]
    fn test_err_incomplete() {
        check_err("", RollError::IncompleteReduction { remaining: 0 });
        check_err("3 d6", RollError::IncompleteReduction { remaining: 2 });
    }

    #[test]
    fn test_err_too_many_rolls() {
        check_err("600d6 + 401d6", RollError::TooManyRolls { max: 1000 });
        let mut ctx = RollContext::new_unbounded(mock_roller());
        assert!(ctx.eval("600d6 + 401d6").is_ok());
    }

    #[test]
    fn test_roll_limit_resets_between_evaluations() {
        let mut ctx = RollContext::new_bounded(10, mock_roller());
        assert!(ctx.eval("10d6").is_ok());
        assert!(ctx.eval("10d6").is_ok());
        assert_eq!(
            ctx.eval("11d6").unwrap_err(),
            Error::from(RollError::TooManyRolls { max: 10 })
        );
    }

    #[test]
    fn test_err_overflow() {
        check_err("9223372036854775807 + 1", RollError::Overflow { position: 20 });
        check_err("9223372036854775807 * 2 + 1", RollError::Overflow { position: 20 });
    }

    #[test]
    fn test_roll_range() {
        let mut ctx = RollContext::new_bounded(1, mock_roller());
        assert_eq!(ctx.roll_range(20, 1), Ok(10));
        assert_eq!(ctx.roll_range(1, 20), Err(RollError::TooManyRolls { max: 1 }));
    }
}

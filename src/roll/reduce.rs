//! The arithmetic passes: every triple `Number op Number` whose operator is in
//! the requested set collapses into one number, left to right.

use super::{error::RollError, trace::Collapse, RResult};
use crate::common::*;
use crate::parse::ast::{Token, TokenSequence};
use tracing::debug;

/// Collapses every operator of `ops` in `seq`, left to right.
///
/// A collapsed value stays in place, so it becomes the left operand of the next
/// operator of the same pass.
pub fn reduce(seq: &mut TokenSequence, ops: &[BinaryOperator]) -> RResult<Vec<Collapse>> {
    let mut collapses = Vec::new();
    let mut i = 0;
    while let Some(token) = seq.get(i) {
        let op = match token.node {
            Token::Operator(op) if ops.contains(&op) => op,
            _ => {
                i += 1;
                continue;
            }
        };
        let position = token.span.start;

        let left = i.checked_sub(1).and_then(|l| seq.number_at(l));
        let right = seq.number_at(i + 1);
        let (Some(left), Some(right)) = (left, right) else {
            return Err(RollError::Structural {
                position,
                operator: op,
            });
        };

        let result = match op.apply(left, right) {
            Some(x) => x,
            None if op == BinaryOperator::Div && right == 0 => {
                return Err(RollError::ZeroDivision { position })
            }
            None => return Err(RollError::Overflow { position }),
        };
        debug!(left, %op, right, result, "collapsed");

        seq.collapse(i, result);
        collapses.push(Collapse {
            left,
            op,
            right,
            result,
        });
    }
    Ok(collapses)
}

/// Extracts the grand total once every pass has run.
pub fn finish(seq: &TokenSequence) -> RResult<Int> {
    seq.single_number()
        .ok_or(RollError::IncompleteReduction {
            remaining: seq.len(),
        })
}

use crate::common::*;
use crate::RollContext;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

pub(crate) fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Sub),
        Just(BinaryOperator::Mul),
        Just(BinaryOperator::Div),
    ]
}

/// A literal-only expression: a first operand and `(operator, operand)` pairs.
pub(crate) fn literal_expression_strategy(
) -> impl Strategy<Value = (Int, Vec<(BinaryOperator, Int)>)> {
    (
        1..=1000 as Int,
        prop::collection::vec((operator_strategy(), 1..=1000 as Int), 0..6),
    )
}

pub(crate) fn render(first: Int, rest: &[(BinaryOperator, Int)]) -> String {
    rest.iter()
        .fold(first.to_string(), |acc, (op, x)| format!("{} {} {}", acc, op, x))
}

/// Folds `*` and `/` into their left operand as they appear, then sums the
/// additive terms left to right.
pub(crate) fn two_pass_reference(first: Int, rest: &[(BinaryOperator, Int)]) -> Int {
    let mut terms = vec![first];
    let mut signs = Vec::new();
    for &(op, x) in rest {
        match op {
            BinaryOperator::Mul | BinaryOperator::Div => {
                let last = terms.pop().unwrap_or_default();
                terms.push(op.apply(last, x).unwrap());
            }
            BinaryOperator::Add | BinaryOperator::Sub => {
                signs.push(op);
                terms.push(x);
            }
        }
    }
    let mut terms = terms.into_iter();
    let first = terms.next().unwrap_or_default();
    signs
        .into_iter()
        .zip(terms)
        .fold(first, |acc, (op, x)| op.apply(acc, x).unwrap())
}

proptest! {
    #[test]
    fn prop_literals_match_two_pass_reference((first, rest) in literal_expression_strategy()) {
        let expr = render(first, &rest);
        let total = crate::evaluate(&expr).unwrap();
        prop_assert_eq!(total.value, two_pass_reference(first, &rest));
    }

    #[test]
    fn prop_dice_within_bounds(count in 1..=50 as UInt, sides in 1..=100 as UInt, seed: u64) {
        let mut ctx = RollContext::new_unbounded(StdRng::seed_from_u64(seed));
        let total = ctx.eval(&format!("{}d{}", count, sides)).unwrap();

        let count = Int::from(count);
        let max = count * Int::from(sides);
        prop_assert!((count..=max).contains(&total.value));

        let group = total.trace.rolls().next().unwrap();
        prop_assert_eq!(group.rolls.len() as Int, count);
        prop_assert!(group.rolls.iter().all(|&x| (1..=sides).contains(&x)));
    }

    #[test]
    fn prop_non_negative_total_retokenizes(x in 0..=Int::MAX) {
        let seq = crate::tokenize(&x.to_string()).unwrap();
        prop_assert_eq!(seq.single_number(), Some(x));
    }
}

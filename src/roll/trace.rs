use super::stringify::Stringify;
use crate::common::*;
use crate::parse::ast::Span;

/// The dice rolled for one dice group, in roll order.
pub type RollTrace = Vec<RolledGroup>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RolledGroup {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub rolls: NonEmpty<UInt>,
    pub subtotal: Int,
    pub span: Span,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Collapse {
    pub left: Int,
    pub op: BinaryOperator,
    pub right: Int,
    pub result: Int,
}

#[enum_dispatch::enum_dispatch]
pub trait AcceptTrace {
    fn accept<S: Stringify + ?Sized>(&self, s: &mut S) -> String;
}

impl AcceptTrace for RolledGroup {
    fn accept<S: Stringify + ?Sized>(&self, s: &mut S) -> String {
        s.str_rolled(self)
    }
}

impl AcceptTrace for Collapse {
    fn accept<S: Stringify + ?Sized>(&self, s: &mut S) -> String {
        s.str_collapse(self)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(AcceptTrace)]
pub enum Step {
    Rolled(RolledGroup),
    Collapsed(Collapse),
}

/// Every roll and every collapse of one evaluation, in the order performed.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(rolls: RollTrace, collapses: Vec<Collapse>) -> Self {
        let steps = rolls
            .into_iter()
            .map(Step::from)
            .chain(collapses.into_iter().map(Step::from))
            .collect();
        Self { steps }
    }

    pub fn rolls(&self) -> impl Iterator<Item = &RolledGroup> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Rolled(group) => Some(group),
            Step::Collapsed(_) => None,
        })
    }

    pub fn collapses(&self) -> impl Iterator<Item = &Collapse> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Collapsed(collapse) => Some(collapse),
            Step::Rolled(_) => None,
        })
    }
}
